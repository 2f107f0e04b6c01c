//! DOM binding for the reveal controller.
//!
//! `IntersectionObserver` is the visibility watcher; tagged elements are
//! found with a selector query and claimed through a `data-reveal`
//! attribute.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use reveal::{
    RevealController, RevealIntent, RevealMark, RevealStyle, Revealable, VisibilityEntry,
    VisibilityWatcher, WatchOptions,
};
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::describe;

const MARK_ATTRIBUTE: &str = "data-reveal";

/// Reasons the reveal system could not start in this browser
#[derive(Debug, thiserror::Error)]
pub enum RevealDomError {
    #[error("no window or document available")]
    NoDocument,

    #[error("IntersectionObserver unavailable: {0}")]
    Unsupported(String),

    #[error("selector query failed: {0}")]
    Query(String),
}

/// A tagged element in the live document
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement(HtmlElement);

impl Revealable for DomElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn mark(&self) -> Option<RevealMark> {
        self.0
            .get_attribute(MARK_ATTRIBUTE)
            .and_then(|value| RevealMark::decode(&value))
    }

    fn set_mark(&self, mark: Option<RevealMark>) {
        let result = match mark {
            Some(mark) => self.0.set_attribute(MARK_ATTRIBUTE, &mark.encode()),
            None => self.0.remove_attribute(MARK_ATTRIBUTE),
        };
        if let Err(err) = result {
            warn!(error = %describe(&err), "failed to update reveal marker");
        }
    }

    fn apply(&self, style: &RevealStyle) {
        let css = self.0.style();
        let result = css
            .set_property("opacity", &style.css_opacity())
            .and_then(|_| css.set_property("transform", style.css_transform()));
        if let Err(err) = result {
            warn!(error = %describe(&err), "failed to apply reveal style");
        }
    }
}

/// The shared `IntersectionObserver` of one controller
pub struct DomWatcher {
    observer: IntersectionObserver,
}

impl VisibilityWatcher for DomWatcher {
    type Target = DomElement;

    fn observe(&mut self, target: &DomElement) {
        self.observer.observe(&target.0);
    }

    fn unobserve(&mut self, target: &DomElement) {
        self.observer.unobserve(&target.0);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

type ControllerSlot = Rc<RefCell<Option<RevealController<DomWatcher>>>>;

/// A running reveal controller bound to the current document.
///
/// Dropping it tears the controller down before the observer callback is
/// released.
pub struct DomReveal {
    controller: ControllerSlot,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl DomReveal {
    /// Observe every tagged element currently in the document.
    pub fn activate(options: WatchOptions) -> Result<Self, RevealDomError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(RevealDomError::NoDocument)?;

        let controller: ControllerSlot = Rc::new(RefCell::new(None));
        let slot = Rc::downgrade(&controller);
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            deliver(&slot, entries);
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_css());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|err| RevealDomError::Unsupported(describe(&err)))?;

        let nodes = document
            .query_selector_all(RevealIntent::SELECTOR)
            .map_err(|err| RevealDomError::Query(describe(&err)))?;
        let targets = (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(DomElement);

        let active = RevealController::activate(DomWatcher { observer }, targets, options);
        *controller.borrow_mut() = Some(active);

        Ok(Self {
            controller,
            _callback: callback,
        })
    }

    /// Disconnect the observer and release every pending element.
    pub fn teardown(self) {
        if let Some(mut controller) = self.controller.borrow_mut().take() {
            controller.teardown();
        }
    }
}

/// Observer callback: convert the entry batch and hand it to the controller.
fn deliver(slot: &Weak<RefCell<Option<RevealController<DomWatcher>>>>, entries: js_sys::Array) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        warn!("reveal notification arrived while the controller was busy");
        return;
    };
    let Some(controller) = guard.as_mut() else {
        return;
    };

    let batch = entries
        .iter()
        .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
        .filter_map(|entry| {
            let target = entry.target().dyn_into::<HtmlElement>().ok()?;
            Some(VisibilityEntry {
                target: DomElement(target),
                is_intersecting: entry.is_intersecting(),
                intersection_ratio: entry.intersection_ratio(),
            })
        });

    controller.handle(batch);
}
