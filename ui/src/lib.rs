// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;

use api::prefs::converter_prefs::ConverterPrefs;
use components::converter::BtcUsdConverter;
use components::pico::Container;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let converter_css = r#"
    .rate-line {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
    }

    /* --- DIRECTION ARROWS --- */
    .arrow-icon { flex-shrink: 0; }
    .arrow-up { color: #16a34a; }
    .arrow-down { color: #dc2626; }
    .rate-error { color: var(--pico-del-color); }

    /* --- UNIT SWITCH --- */
    .switch-cell {
        display: flex;
        justify-content: center;
        align-items: flex-end;
        padding-bottom: var(--pico-spacing);
    }
    .switch-icon { display: block; }

    .unit-badge {
        display: flex;
        align-items: center;
        padding: 0 1rem;
        border: var(--pico-border-width) solid var(--pico-form-element-border-color);
        background-color: var(--pico-form-element-background-color);
    }

    input.hide-placeholder-focus:focus::placeholder {
        color: transparent;
        opacity: 0;
    }
"#;

    // read once per mount. in the browser there is no environment, so this yields the defaults.
    let prefs = use_hook(|| {
        let prefs = ConverterPrefs::from_env();
        dioxus_logger::tracing::info!("prefs: {:#?}", prefs);
        prefs
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        style {
            "{converter_css}"
        }
        Container {
            BtcUsdConverter {
                prefs,
            }
        }
    }
}
