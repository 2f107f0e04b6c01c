//! Mounts the scroll reveal controller for the enclosing page view

use dioxus::prelude::*;

/// Reveals `fade-in`, `fade-left` and `fade-right` elements as they scroll
/// into view.
///
/// Place it once per page, after the tagged content. The controller is
/// created after the first render and torn down when the page unmounts.
/// Renders nothing; on the server it does nothing.
#[component]
pub fn RevealSystem() -> Element {
    #[cfg(feature = "web")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use reveal::WatchOptions;

        use crate::browser::DomReveal;

        let slot = use_hook(|| Rc::new(RefCell::new(None::<DomReveal>)));

        let activate_slot = slot.clone();
        use_effect(move || {
            let mut current = activate_slot.borrow_mut();
            if current.is_some() {
                return;
            }
            match DomReveal::activate(WatchOptions::default()) {
                Ok(active) => *current = Some(active),
                Err(err) => tracing::warn!(error = %err, "scroll reveal disabled"),
            }
        });

        use_drop(move || {
            if let Some(active) = slot.borrow_mut().take() {
                active.teardown();
            }
        });
    }

    rsx! {}
}
