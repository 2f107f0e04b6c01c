//! The reveal controller.
//!
//! A controller owns one [`VisibilityWatcher`] and the observation registry
//! of a single page view. Each registered element moves from
//! [`RevealState::Pending`] to [`RevealState::Revealed`] at most once, the
//! first time a notification reports it visible enough, and is unobserved in
//! the same step.
//!
//! # Lifecycle
//!
//! ```text
//! activate() ──► handle(batch) ──► handle(batch) ──► ... ──► teardown() / drop
//!     │               │
//!     │               └─► apply style, mark revealed, unobserve
//!     └─► claim + observe every tagged element
//! ```
//!
//! Teardown disconnects the watcher and releases every element still
//! pending without styling it. It runs on drop and may be called any number
//! of times.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error};

use crate::intent::RevealIntent;
use crate::watcher::{
    ControllerId, RevealMark, Revealable, VisibilityEntry, VisibilityWatcher, WatchOptions,
};

/// Lifecycle status of an element known to a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Debug)]
struct Watched<T> {
    target: T,
    intent: RevealIntent,
}

/// Runs one-shot reveal transitions for the tagged elements of a page view.
pub struct RevealController<W: VisibilityWatcher> {
    id: ControllerId,
    options: WatchOptions,
    watcher: Option<W>,
    /// Elements still pending. Linear scans are fine at page scale.
    registry: Vec<Watched<W::Target>>,
    revealed: Vec<W::Target>,
}

impl<W: VisibilityWatcher> RevealController<W> {
    /// Register every tagged element in `targets` with `watcher`.
    ///
    /// Elements without a reveal class, elements claimed by another live
    /// controller and elements revealed earlier are skipped.
    pub fn activate(
        mut watcher: W,
        targets: impl IntoIterator<Item = W::Target>,
        options: WatchOptions,
    ) -> Self {
        let id = ControllerId::next();
        let mut registry: Vec<Watched<W::Target>> = Vec::new();
        let mut skipped = 0usize;

        for target in targets {
            let Some(intent) = RevealIntent::resolve(|class| target.has_class(class)) else {
                continue;
            };

            match target.mark() {
                None => {}
                Some(RevealMark::Claimed(owner)) if owner == id => continue,
                Some(mark) => {
                    debug!(controller = %id, ?mark, "skipping element owned elsewhere");
                    skipped += 1;
                    continue;
                }
            }

            target.set_mark(Some(RevealMark::Claimed(id)));
            watcher.observe(&target);
            registry.push(Watched { target, intent });
        }

        debug!(
            controller = %id,
            watched = registry.len(),
            skipped,
            threshold = options.threshold,
            root_margin = %options.root_margin.to_css(),
            "reveal controller activated"
        );

        Self {
            id,
            options,
            watcher: Some(watcher),
            registry,
            revealed: Vec::new(),
        }
    }

    /// Process one batch of visibility notifications.
    ///
    /// Returns how many elements were revealed by this batch.
    pub fn handle(
        &mut self,
        entries: impl IntoIterator<Item = VisibilityEntry<W::Target>>,
    ) -> usize {
        let Some(watcher) = self.watcher.as_mut() else {
            return 0;
        };

        let mut count = 0;
        for entry in entries {
            if !entry.is_visible_enough(&self.options) {
                continue;
            }
            let Some(index) = self.registry.iter().position(|w| w.target == entry.target) else {
                continue;
            };

            let Watched { target, intent } = self.registry.swap_remove(index);
            let style = intent.target_style();

            // A failing element must not stop the rest of the batch.
            if let Err(panic_info) = catch_unwind(AssertUnwindSafe(|| target.apply(&style))) {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                error!(
                    controller = %self.id,
                    %intent,
                    panic = %panic_msg,
                    "applying reveal style panicked"
                );
            }

            target.set_mark(Some(RevealMark::Revealed));
            watcher.unobserve(&target);
            debug!(controller = %self.id, %intent, "element revealed");

            self.revealed.push(target);
            count += 1;
        }
        count
    }

    /// Disconnect the watcher and release every pending element.
    pub fn teardown(&mut self) {
        let Some(mut watcher) = self.watcher.take() else {
            return;
        };
        watcher.disconnect();

        let released = self.registry.len();
        for watched in self.registry.drain(..) {
            if watched.target.mark() == Some(RevealMark::Claimed(self.id)) {
                watched.target.set_mark(None);
            }
        }

        debug!(
            controller = %self.id,
            released,
            revealed = self.revealed.len(),
            "reveal controller torn down"
        );
    }

    /// State of `target` as seen by this controller, `None` if it was never
    /// registered here or was released by teardown.
    pub fn state_of(&self, target: &W::Target) -> Option<RevealState> {
        if self.registry.iter().any(|w| &w.target == target) {
            Some(RevealState::Pending)
        } else if self.revealed.iter().any(|t| t == target) {
            Some(RevealState::Revealed)
        } else {
            None
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn options(&self) -> &WatchOptions {
        &self.options
    }

    /// Number of elements still watched.
    pub fn pending_len(&self) -> usize {
        self.registry.len()
    }

    pub fn revealed_len(&self) -> usize {
        self.revealed.len()
    }

    /// Whether the watcher is still connected.
    pub fn is_active(&self) -> bool {
        self.watcher.is_some()
    }
}

impl<W: VisibilityWatcher> Drop for RevealController<W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Axis;
    use crate::testing::{FakeElement, SimulatedWatcher};

    fn activate(elements: &[FakeElement]) -> (RevealController<SimulatedWatcher>, SimulatedWatcher) {
        let watcher = SimulatedWatcher::new();
        let controller = RevealController::activate(
            watcher.clone(),
            elements.iter().cloned(),
            WatchOptions::default(),
        );
        (controller, watcher)
    }

    #[test]
    fn test_activation_observes_only_tagged_elements() {
        let a = FakeElement::new(&["fade-in"]);
        let plain = FakeElement::new(&["partner-logo"]);
        let b = FakeElement::new(&["h2", "fade-right"]);

        let (controller, watcher) = activate(&[a.clone(), plain.clone(), b.clone()]);

        assert_eq!(controller.pending_len(), 2);
        assert!(watcher.is_observing(&a));
        assert!(watcher.is_observing(&b));
        assert!(!watcher.is_observing(&plain));
        assert_eq!(controller.state_of(&a), Some(RevealState::Pending));
        assert_eq!(controller.state_of(&plain), None);
    }

    #[test]
    fn test_exactly_once_transition() {
        let a = FakeElement::new(&["fade-in"]);
        let (mut controller, watcher) = activate(&[a.clone()]);

        let mut total = 0;
        for _ in 0..5 {
            total += controller.handle([a.crossing(0.5)]);
        }

        assert_eq!(total, 1);
        assert_eq!(a.applied().len(), 1);
        assert_eq!(controller.state_of(&a), Some(RevealState::Revealed));
        assert!(!watcher.is_observing(&a));
    }

    #[test]
    fn test_below_threshold_stays_pending() {
        let a = FakeElement::new(&["fade-left"]);
        let (mut controller, watcher) = activate(&[a.clone()]);

        for ratio in [0.0, 0.01, 0.05, 0.09, 0.099] {
            assert_eq!(controller.handle([a.crossing(ratio)]), 0);
        }
        assert_eq!(controller.handle([a.leaving()]), 0);

        assert!(a.applied().is_empty());
        assert_eq!(controller.state_of(&a), Some(RevealState::Pending));
        assert!(watcher.is_observing(&a));
    }

    #[test]
    fn test_teardown_releases_pending_elements() {
        let a = FakeElement::new(&["fade-in"]);
        let b = FakeElement::new(&["fade-right"]);
        let (mut controller, watcher) = activate(&[a.clone(), b.clone()]);

        controller.handle([a.crossing(1.0)]);
        controller.teardown();

        assert!(!controller.is_active());
        assert!(watcher.is_disconnected());
        assert_eq!(controller.pending_len(), 0);
        assert_eq!(controller.handle([b.crossing(1.0)]), 0);
        assert!(b.applied().is_empty());
        assert_eq!(b.mark(), None);
        assert_eq!(a.mark(), Some(RevealMark::Revealed));
    }

    #[test]
    fn test_double_teardown_is_noop() {
        let a = FakeElement::new(&["fade-in"]);
        let (mut controller, watcher) = activate(&[a]);

        controller.teardown();
        controller.teardown();
        drop(controller);

        assert_eq!(watcher.disconnect_count(), 1);
    }

    #[test]
    fn test_drop_tears_down() {
        let a = FakeElement::new(&["fade-in"]);
        let (controller, watcher) = activate(&[a.clone()]);

        drop(controller);

        assert!(watcher.is_disconnected());
        assert_eq!(a.mark(), None);
    }

    #[test]
    fn test_independent_intents() {
        let up = FakeElement::new(&["fade-in"]);
        let left = FakeElement::new(&["fade-left"]);
        let right = FakeElement::new(&["fade-right"]);
        let (mut controller, _watcher) = activate(&[up.clone(), left.clone(), right.clone()]);

        let revealed = controller.handle([up.crossing(0.3), left.crossing(0.3), right.crossing(0.3)]);

        assert_eq!(revealed, 3);
        assert_eq!(up.applied(), vec![RevealIntent::FadeUp.target_style()]);
        assert_eq!(left.applied(), vec![RevealIntent::FadeFromLeft.target_style()]);
        assert_eq!(right.applied(), vec![RevealIntent::FadeFromRight.target_style()]);
        assert_eq!(up.applied()[0].axis, Axis::Vertical);
        assert_eq!(left.applied()[0].axis, Axis::Horizontal);
    }

    #[test]
    fn test_recrossing_after_reveal_does_not_revert() {
        let a = FakeElement::new(&["fade-right"]);
        let (mut controller, _watcher) = activate(&[a.clone()]);

        controller.handle([a.crossing(0.2)]);
        for _ in 0..3 {
            controller.handle([a.leaving()]);
            controller.handle([a.crossing(0.8)]);
        }

        assert_eq!(a.applied().len(), 1);
        assert_eq!(a.mark(), Some(RevealMark::Revealed));
        assert_eq!(controller.state_of(&a), Some(RevealState::Revealed));
    }

    #[test]
    fn test_scenario_out_of_order_reveals() {
        let a = FakeElement::new(&["fade-in"]);
        let b = FakeElement::new(&["fade-left"]);
        let c = FakeElement::new(&["fade-right"]);
        let (mut controller, watcher) = activate(&[a.clone(), b.clone(), c.clone()]);

        assert_eq!(controller.handle([a.crossing(0.15)]), 1);
        assert_eq!(controller.handle([c.crossing(0.4)]), 1);
        assert_eq!(controller.handle([b.crossing(1.0)]), 1);

        for (element, intent) in [
            (&a, RevealIntent::FadeUp),
            (&b, RevealIntent::FadeFromLeft),
            (&c, RevealIntent::FadeFromRight),
        ] {
            assert_eq!(controller.state_of(element), Some(RevealState::Revealed));
            assert_eq!(element.applied(), vec![intent.target_style()]);
        }
        assert_eq!(controller.pending_len(), 0);
        assert_eq!(controller.revealed_len(), 3);
        assert_eq!(watcher.observed_len(), 0);
    }

    #[test]
    fn test_panicking_element_does_not_block_batch() {
        let bad = FakeElement::new(&["fade-in"]).panicking();
        let good = FakeElement::new(&["fade-left"]);
        let (mut controller, watcher) = activate(&[bad.clone(), good.clone()]);

        let revealed = controller.handle([bad.crossing(1.0), good.crossing(1.0)]);

        assert_eq!(revealed, 2);
        assert_eq!(good.applied().len(), 1);
        assert!(!watcher.is_observing(&bad));
        assert_eq!(controller.state_of(&bad), Some(RevealState::Revealed));
    }

    #[test]
    fn test_overlapping_activation_does_not_double_register() {
        let a = FakeElement::new(&["fade-in"]);
        let b = FakeElement::new(&["fade-left"]);
        let (mut first, first_watcher) = activate(&[a.clone()]);
        let (mut second, second_watcher) = activate(&[a.clone(), b.clone()]);

        assert!(first_watcher.is_observing(&a));
        assert!(!second_watcher.is_observing(&a));
        assert!(second_watcher.is_observing(&b));

        assert_eq!(second.handle([a.crossing(1.0)]), 0);
        assert_eq!(first.handle([a.crossing(1.0)]), 1);
        assert_eq!(a.applied().len(), 1);
    }

    #[test]
    fn test_revealed_elements_skipped_by_later_controllers() {
        let a = FakeElement::new(&["fade-in"]);
        {
            let (mut first, _) = activate(&[a.clone()]);
            first.handle([a.crossing(1.0)]);
        }

        let (mut second, watcher) = activate(&[a.clone()]);
        assert_eq!(second.pending_len(), 0);
        assert!(!watcher.is_observing(&a));
        assert_eq!(second.handle([a.crossing(1.0)]), 0);
        assert_eq!(a.applied().len(), 1);
    }

    #[test]
    fn test_released_elements_can_be_claimed_again() {
        let a = FakeElement::new(&["fade-up-ish", "fade-left"]);
        {
            let _first = activate(&[a.clone()]);
        }

        let (mut second, watcher) = activate(&[a.clone()]);
        assert!(watcher.is_observing(&a));
        assert_eq!(second.handle([a.crossing(0.1)]), 1);
        assert_eq!(a.applied(), vec![RevealIntent::FadeFromLeft.target_style()]);
    }

    #[test]
    fn test_duplicate_targets_registered_once() {
        let a = FakeElement::new(&["fade-in"]);
        let (controller, watcher) = activate(&[a.clone(), a.clone()]);

        assert_eq!(controller.pending_len(), 1);
        assert_eq!(watcher.observe_count(), 1);
    }

    #[test]
    fn test_unknown_targets_ignored() {
        let a = FakeElement::new(&["fade-in"]);
        let stranger = FakeElement::new(&["fade-in"]);
        let (mut controller, _watcher) = activate(&[a.clone()]);

        assert_eq!(controller.handle([stranger.crossing(1.0)]), 0);
        assert!(stranger.applied().is_empty());
        assert_eq!(controller.pending_len(), 1);
    }

    #[test]
    fn test_duplicate_crossings_in_one_batch() {
        let all_tags = FakeElement::new(&["fade-right", "fade-left", "fade-in"]);
        let b = FakeElement::new(&["fade-left"]);
        let (mut controller, _watcher) = activate(&[all_tags.clone(), b.clone()]);

        let revealed = controller.handle([
            all_tags.crossing(0.5),
            all_tags.crossing(0.9),
            b.crossing(0.2),
        ]);

        assert_eq!(revealed, 2);
        assert_eq!(all_tags.applied().len(), 1);
        assert_eq!(all_tags.applied()[0].css_transform(), "translateY(0)");

        controller.teardown();
        assert_eq!(controller.pending_len(), 0);
        assert_eq!(controller.revealed_len(), 2);

        let (later, later_watcher) = activate(&[all_tags.clone(), b.clone()]);
        assert_eq!(later.pending_len(), 0);
        assert_eq!(later_watcher.observed_len(), 0);
    }

    #[test]
    fn test_host_stops_delivering_after_teardown() {
        let a = FakeElement::new(&["fade-in"]);
        let b = FakeElement::new(&["fade-left"]);
        let (mut controller, watcher) = activate(&[a.clone(), b.clone()]);

        let batch = watcher.deliverable([a.crossing(0.5)]);
        assert_eq!(controller.handle(batch), 1);

        // Revealed elements are no longer delivered at all.
        assert!(watcher.deliverable([a.crossing(0.5)]).is_empty());

        controller.teardown();
        assert!(watcher.deliverable([b.crossing(0.5)]).is_empty());
        assert!(b.applied().is_empty());
    }
}
