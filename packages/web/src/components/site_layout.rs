//! Layout shared by every localized page

use dioxus::prelude::*;

use super::Header;
use crate::routes::Route;

/// Navigation shell around the routed page
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let locale = route.locale();

    rsx! {
        div {
            lang: locale.as_str(),
            dir: locale.text_direction(),
            class: "site-root",

            Header { route: route.clone() }

            main {
                Outlet::<Route> {}
            }

            div { id: "portal" }
        }
    }
}
