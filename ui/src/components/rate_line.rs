//! The "Live BTC/USD Rate" line: the current rate (or the fetch error) and a direction arrow.

use api::spot_rate::Direction;
use dioxus::prelude::*;

use crate::components::pico::Spinner;

/// An arrow pointing up in green or down in red.
#[component]
pub fn DirectionArrow(direction: Direction) -> Element {
    let (class, path, label) = match direction {
        Direction::Up => ("arrow-icon arrow-up", "M12 19V5M5 12l7-7 7 7", "rate went up"),
        Direction::Down => ("arrow-icon arrow-down", "M12 5v14M19 12l-7 7-7-7", "rate went down"),
    };

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-label": "{label}",
            path {
                d: "{path}",
            }
        }
    }
}

/// Shows a spinner until the first fetch resolves, then the rate text and arrow.
/// `failed` marks the text as the fetch error rather than a rate.
#[component]
pub fn RateLine(loading: bool, failed: bool, text: String, direction: Direction) -> Element {
    let value_class = if failed {
        "rate-value rate-error"
    } else {
        "rate-value"
    };

    rsx! {
        div {
            class: "rate-line",
            span { "Live BTC/USD Rate:" }
            if loading {
                Spinner {}
            } else {
                span {
                    class: "{value_class}",
                    "{text}"
                }
                DirectionArrow {
                    direction,
                }
            }
        }
    }
}
