//! Dismissible promotional banner

use dioxus::prelude::*;

use crate::nav::DEMO_BOOKING_URL;

/// Banner pinned to the bottom of the landing page until closed
#[component]
pub fn FixedBanner() -> Element {
    let mut is_visible = use_signal(|| true);

    if !is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fixed-banner",
            button {
                class: "banner-close",
                aria_label: "Close banner",
                onclick: move |_| is_visible.set(false),
                img {
                    src: "/images/icons8-macos-close-32.png",
                    alt: "Close banner",
                    width: "32",
                    height: "32",
                }
            }
            div {
                class: "banner-content",
                span { class: "banner-text", "Avail our lowest rates when you avail GiyaPay this year." }
                a {
                    href: DEMO_BOOKING_URL,
                    target: "_blank",
                    rel: "noopener noreferrer",
                    class: "banner-button",
                    "Get a Demo"
                }
            }
        }
    }
}
