//! Site navigation header

use dioxus::prelude::*;

use super::Container;
use crate::locale::Locale;
use crate::nav::{NavItem, NavTarget, DEMO_BOOKING_URL, NAV_ITEMS};
use crate::routes::Route;
use crate::state::MenuState;

/// Persistent navigation bar with a collapsible mobile menu
#[component]
pub fn Header(route: Route) -> Element {
    let locale = route.locale();
    let path = route.to_string();

    let mut menu = use_hook(MenuState::new);
    let scrolled = use_signal(|| false);

    // Track window scroll for the compact navbar style
    #[cfg(feature = "web")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::browser::ScrollListener;
        use crate::state::is_scrolled;

        let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollListener>)));

        let attach = listener.clone();
        use_effect(move || {
            if attach.borrow().is_some() {
                return;
            }
            let attached = ScrollListener::attach(move |scroll_y| {
                let mut scrolled = scrolled;
                let next = is_scrolled(scroll_y);
                if *scrolled.peek() != next {
                    scrolled.set(next);
                }
            });
            *attach.borrow_mut() = attached;
        });

        use_drop(move || {
            listener.borrow_mut().take();
        });
    }
    let is_open = (menu.is_open)();

    rsx! {
        nav {
            class: if scrolled() { "navbar navbar-scrolled" } else { "navbar" },
            Container {
                div {
                    class: "navbar-content",

                    // Logo
                    Link {
                        to: locale.home_path(),
                        class: "navbar-logo",
                        img {
                            src: "/images/giyapay-logo.png",
                            alt: "GiyaPay Logo",
                            width: "160",
                            height: "45",
                            class: "h-auto w-auto",
                        }
                    }

                    // Desktop navigation
                    div {
                        class: "navbar-desktop-menu",
                        for item in NAV_ITEMS {
                            NavEntry {
                                key: "{item.label}",
                                item,
                                locale,
                                active: item.is_active(&path, locale),
                                class: "nav-link",
                            }
                        }
                        a {
                            href: DEMO_BOOKING_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn-get-demo",
                            "Get A Demo"
                        }
                        LanguageSelector { route: route.clone() }
                    }

                    // Mobile menu button
                    button {
                        class: "navbar-mobile-toggle",
                        aria_label: "Toggle menu",
                        aria_expanded: "{is_open}",
                        onclick: move |_| menu.toggle(),
                        div {
                            class: if is_open { "hamburger-icon open" } else { "hamburger-icon" },
                            span {}
                            span {}
                            span {}
                        }
                    }
                }

                // Mobile menu
                if is_open {
                    div {
                        class: "navbar-mobile-menu",
                        for item in NAV_ITEMS {
                            NavEntry {
                                key: "{item.label}",
                                item,
                                locale,
                                active: item.is_active(&path, locale),
                                class: "mobile-nav-link",
                                onclick: move |_| menu.close(),
                            }
                        }
                        a {
                            href: DEMO_BOOKING_URL,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "btn-get-demo-mobile",
                            onclick: move |_| menu.close(),
                            "Get A Demo"
                        }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavEntryProps {
    item: NavItem,
    locale: Locale,
    active: bool,
    class: &'static str,
    onclick: Option<EventHandler<MouseEvent>>,
}

#[component]
fn NavEntry(props: NavEntryProps) -> Element {
    let href = props.item.href(props.locale);
    let class = if props.active {
        format!("{} active", props.class)
    } else {
        props.class.to_string()
    };
    let onclick = props.onclick;
    let label = props.item.label;

    match props.item.target {
        NavTarget::Section(_) => rsx! {
            a {
                href,
                class,
                onclick: move |evt: MouseEvent| {
                    if let Some(handler) = onclick {
                        handler.call(evt);
                    }
                },
                "{label}"
            }
        },
        NavTarget::Home | NavTarget::Blog => rsx! {
            Link {
                to: href,
                class,
                onclick: move |evt: MouseEvent| {
                    if let Some(handler) = onclick {
                        handler.call(evt);
                    }
                },
                "{label}"
            }
        },
    }
}

/// Links to the current page in every published locale
#[component]
fn LanguageSelector(route: Route) -> Element {
    let current = route.locale();

    rsx! {
        div {
            class: "language-selector",
            for locale in Locale::ALL {
                Link {
                    key: "{locale}",
                    to: route.with_locale(locale),
                    class: if locale == current { "language-option active" } else { "language-option" },
                    "{locale.label()}"
                }
            }
        }
    }
}
