use dioxus::prelude::*;

/// Centered, padded page-width wrapper
#[component]
pub fn Container(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 {class}",
            {children}
        }
    }
}
