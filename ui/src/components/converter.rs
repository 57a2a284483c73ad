//! The BTC/USD converter widget.

use api::conversion::convert;
use api::conversion::parse_quantity;
use api::conversion::OutputAmount;
use api::prefs::converter_prefs::ConverterPrefs;
use dioxus::prelude::*;

use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Spinner;
use crate::components::quantity_input::QuantityInput;
use crate::components::quantity_input::QuantityOutput;
use crate::components::rate_line::RateLine;
use crate::components::unit_switch::UnitSwitch;
use crate::hooks::use_spot_rate::use_spot_rate;

#[component]
pub fn BtcUsdConverter(prefs: ConverterPrefs) -> Element {
    let spot_rate = use_spot_rate(prefs);
    let input_unit = use_signal(|| prefs.input_unit());
    let mut input_text = use_signal(|| "0".to_string());
    let mut output = use_signal(|| None::<OutputAmount>);

    // Recompute whenever the quantity, the unit or the rate changes. While no
    // rate has arrived yet the previous output is left as it is.
    use_effect(move || {
        let amount = parse_quantity(&input_text.read());
        let unit = input_unit();
        let rate = spot_rate.read().rate();
        if let Some(converted) = convert(amount, unit, rate) {
            if *output.peek() != Some(converted) {
                output.set(Some(converted));
            }
        }
    });

    let state = spot_rate.read();
    let unit = input_unit();
    let output_text = output()
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| "0".to_string());

    rsx! {
        h3 { "BTC / USD Calculator" }
        Card {
            RateLine {
                loading: state.is_loading(),
                failed: state.error().is_some(),
                text: state.display_text(),
                direction: state.direction(),
            }
            Grid {
                div {
                    label { "Quantity:" }
                    if state.is_loading() {
                        Spinner {}
                    } else {
                        QuantityInput {
                            value: input_text(),
                            unit,
                            on_input: move |text| input_text.set(text),
                        }
                    }
                }
                div {
                    class: "switch-cell",
                    UnitSwitch {
                        unit: input_unit,
                    }
                }
                div {
                    label { "You receive:" }
                    QuantityOutput {
                        value: output_text,
                        unit: unit.counterpart(),
                    }
                }
            }
        }
    }
}
