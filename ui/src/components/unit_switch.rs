use api::unit::Unit;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::components::pico::Button;

/// Swaps the input unit. The entered quantity keeps its number and only
/// changes denomination.
#[component]
pub fn UnitSwitch(mut unit: Signal<Unit>) -> Element {
    let title = format!("Enter the amount in {} instead", unit.read().counterpart().name());

    rsx! {
        Button {
            title,
            outline: true,
            on_click: move |_| {
                unit.write().toggle();
                tracing::debug!("input unit is now {}", unit.peek().code());
            },
            svg {
                class: "switch-icon",
                xmlns: "http://www.w3.org/2000/svg",
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path {
                    d: "M8 7h12m0 0l-4-4m4 4l-4 4M16 17H4m0 0l4 4m-4-4l4-4",
                }
            }
        }
    }
}
