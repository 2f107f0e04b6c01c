//! # Reveal
//!
//! Scroll-triggered, one-shot reveal transitions.
//!
//! Page elements opt in by carrying one of three classes (`fade-in`,
//! `fade-left`, `fade-right`). A [`RevealController`] registers every tagged
//! element with a single shared [`VisibilityWatcher`]; the first time an
//! element is at least 10% visible inside a viewport inset by 50px at the
//! bottom, its target style is applied and the element is unobserved.
//!
//! ```text
//! Page view mount
//!     │
//!     ▼ activate(watcher, targets)
//! RevealController ──observe──► VisibilityWatcher (one per controller)
//!     ▲                               │
//!     └────── handle(entries) ◄───────┘ host notification callback
//!                 │
//!                 └─► apply style ─► mark revealed ─► unobserve
//!
//! Page view unmount ─► teardown() / drop ─► disconnect, release pending
//! ```
//!
//! ## Key Invariants
//!
//! 1. **Pending is initial, Revealed is terminal** - no element ever goes back
//! 2. **At most one watcher per element** - elements are claimed on activation
//! 3. **Teardown is unconditional** - it runs on drop and is idempotent
//! 4. **Nothing is fallible** - host failures degrade to "never revealed"
//!
//! The crate holds no host code. Browser glue lives with the site and
//! implements [`VisibilityWatcher`] and [`Revealable`] over the DOM.

mod controller;
mod intent;
mod watcher;

// Testing utilities (feature-gated)
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use controller::{RevealController, RevealState};
pub use intent::{Axis, RevealIntent, RevealStyle, UnknownIntent};
pub use watcher::{
    ControllerId, Revealable, RevealMark, RootMargin, VisibilityEntry, VisibilityWatcher,
    WatchOptions,
};
