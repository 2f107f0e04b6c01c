//! In-memory host for exercising reveal controllers without a browser.
//!
//! # Feature Flag
//!
//! Outside this crate's own tests the module needs the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! reveal = { path = "../reveal", features = ["testing"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use reveal::testing::{FakeElement, SimulatedWatcher};
//! use reveal::{RevealController, WatchOptions};
//!
//! let hero = FakeElement::new(&["h2", "fade-in"]);
//! let watcher = SimulatedWatcher::new();
//! let mut controller =
//!     RevealController::activate(watcher.clone(), [hero.clone()], WatchOptions::default());
//!
//! let batch = watcher.deliverable([hero.crossing(0.5)]);
//! assert_eq!(controller.handle(batch), 1);
//! assert_eq!(hero.applied().len(), 1);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::intent::RevealStyle;
use crate::watcher::{RevealMark, Revealable, VisibilityEntry, VisibilityWatcher};

#[derive(Debug, Default)]
struct ElementInner {
    classes: Vec<String>,
    mark: Cell<Option<RevealMark>>,
    applied: RefCell<Vec<RevealStyle>>,
    panics: Cell<bool>,
}

/// A fake element with reference identity.
///
/// Clones share state, so a clone handed to a controller can be inspected
/// from the test.
#[derive(Debug, Clone)]
pub struct FakeElement(Rc<ElementInner>);

impl FakeElement {
    pub fn new(classes: &[&str]) -> Self {
        Self(Rc::new(ElementInner {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }))
    }

    /// Make every later `apply` panic.
    pub fn panicking(self) -> Self {
        self.0.panics.set(true);
        self
    }

    /// Styles applied so far, in order.
    pub fn applied(&self) -> Vec<RevealStyle> {
        self.0.applied.borrow().clone()
    }

    /// Notification reporting `ratio` of the element as visible.
    pub fn crossing(&self, ratio: f64) -> VisibilityEntry<Self> {
        VisibilityEntry {
            target: self.clone(),
            is_intersecting: ratio > 0.0,
            intersection_ratio: ratio,
        }
    }

    /// Notification reporting the element as fully out of view.
    pub fn leaving(&self) -> VisibilityEntry<Self> {
        VisibilityEntry {
            target: self.clone(),
            is_intersecting: false,
            intersection_ratio: 0.0,
        }
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Revealable for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.classes.iter().any(|c| c == class)
    }

    fn mark(&self) -> Option<RevealMark> {
        self.0.mark.get()
    }

    fn set_mark(&self, mark: Option<RevealMark>) {
        self.0.mark.set(mark);
    }

    fn apply(&self, style: &RevealStyle) {
        if self.0.panics.get() {
            panic!("element refused style");
        }
        self.0.applied.borrow_mut().push(*style);
    }
}

#[derive(Debug, Default)]
struct WatcherLog {
    observed: Vec<FakeElement>,
    observe_count: usize,
    disconnect_count: usize,
}

/// A watcher that records calls instead of watching a viewport.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWatcher(Rc<RefCell<WatcherLog>>);

impl SimulatedWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self, target: &FakeElement) -> bool {
        self.0.borrow().observed.iter().any(|t| t == target)
    }

    pub fn observed_len(&self) -> usize {
        self.0.borrow().observed.len()
    }

    /// Total `observe` calls, including repeats.
    pub fn observe_count(&self) -> usize {
        self.0.borrow().observe_count
    }

    pub fn disconnect_count(&self) -> usize {
        self.0.borrow().disconnect_count
    }

    pub fn is_disconnected(&self) -> bool {
        self.disconnect_count() > 0
    }

    /// Keep only the entries a real host would deliver: those for targets
    /// currently observed.
    pub fn deliverable(
        &self,
        entries: impl IntoIterator<Item = VisibilityEntry<FakeElement>>,
    ) -> Vec<VisibilityEntry<FakeElement>> {
        entries
            .into_iter()
            .filter(|entry| self.is_observing(&entry.target))
            .collect()
    }
}

impl VisibilityWatcher for SimulatedWatcher {
    type Target = FakeElement;

    fn observe(&mut self, target: &FakeElement) {
        let mut log = self.0.borrow_mut();
        log.observe_count += 1;
        if !log.observed.contains(target) {
            log.observed.push(target.clone());
        }
    }

    fn unobserve(&mut self, target: &FakeElement) {
        self.0.borrow_mut().observed.retain(|t| t != target);
    }

    fn disconnect(&mut self) {
        let mut log = self.0.borrow_mut();
        log.observed.clear();
        log.disconnect_count += 1;
    }
}
