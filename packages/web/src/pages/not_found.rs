//! 404 page

use dioxus::prelude::*;

use crate::components::Container;
use crate::locale::Locale;

/// Catch-all route for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "no route matched");

    rsx! {
        NotFoundContent {}
    }
}

/// Not found message, also shown for unsupported locale segments
#[component]
pub fn NotFoundContent() -> Element {
    let home = Locale::default().home_path();

    rsx! {
        section {
            class: "section-padding min-h-screen pt-32",
            Container {
                div {
                    class: "text-center",
                    h1 { class: "h1 mb-4", "404" }
                    p { class: "text-gray-600 mb-8 text-xl", "The page you are looking for does not exist." }
                    Link { to: home, class: "btn-primary", "Back to Home" }
                }
            }
        }
    }
}
