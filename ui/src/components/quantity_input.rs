use api::unit::Unit;
use dioxus::prelude::*;

/// A numeric field with a unit badge.
///
/// The field is plain text so partial entries like "1." survive while typing;
/// a number input would report them as empty and the re-render would wipe the
/// field. The raw text is handed to `on_input` untouched and coercing it to a
/// number is left to the caller. A value that is numerically zero is cleared when the
/// field gains focus so the user does not have to delete it first.
#[component]
pub fn QuantityInput(value: String, unit: Unit, on_input: EventHandler<String>) -> Element {
    let is_numerically_zero = value.trim().parse::<f64>() == Ok(0.0);

    let handle_focus = move |_: Event<FocusData>| {
        if is_numerically_zero {
            on_input.call("".to_string());
        }
    };

    rsx! {
        div {
            role: "group",
            input {
                r#type: "text",
                class: "hide-placeholder-focus",
                inputmode: "decimal",
                autocomplete: "off",
                placeholder: "Enter {unit.code()} amount",
                value: "{value}",
                onfocus: handle_focus,
                oninput: move |event| on_input.call(event.value()),
            }
            span {
                class: "unit-badge",
                "{unit.code()}"
            }
        }
    }
}

/// The read-only counterpart of [`QuantityInput`].
///
/// Also a text field, since a number field would blank "NaN" and "inf".
#[component]
pub fn QuantityOutput(value: String, unit: Unit) -> Element {
    rsx! {
        div {
            role: "group",
            input {
                r#type: "text",
                value: "{value}",
                readonly: true,
                disabled: true,
            }
            span {
                class: "unit-badge",
                "{unit.code()}"
            }
        }
    }
}
