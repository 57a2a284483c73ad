//! A small set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure pico.min.css is linked in the application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout. Children become equal-width columns.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

/// Pico's busy indicator, an empty inline element with `aria-busy` set.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "spinner",
            "aria-busy": "true",
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    outline: bool,
    #[props(optional)]
    title: Option<String>,
}

/// A secondary-styled button, optionally outlined.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = if props.outline {
        "secondary outline"
    } else {
        "secondary"
    };
    rsx! {
        button {
            class: "{class_str}",
            title: "{props.title.as_deref().unwrap_or(\"\")}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
