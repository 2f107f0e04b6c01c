//! Host seams: the visibility watcher, the elements it watches, and the
//! notifications it delivers.
//!
//! The controller never touches a rendering host directly. A host provides
//! one [`VisibilityWatcher`] per controller and element handles that
//! implement [`Revealable`]; the host feeds [`VisibilityEntry`] batches back
//! into the controller from its notification callback.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Watches registered targets for viewport intersection.
///
/// A single instance serves every target of one controller.
pub trait VisibilityWatcher {
    type Target: Revealable;

    /// Start delivering notifications for `target`.
    fn observe(&mut self, target: &Self::Target);

    /// Stop delivering notifications for `target`.
    fn unobserve(&mut self, target: &Self::Target);

    /// Stop delivering notifications for every target.
    fn disconnect(&mut self);
}

/// An element handle the controller can classify, claim and restyle.
pub trait Revealable: Clone + PartialEq {
    fn has_class(&self, class: &str) -> bool;

    /// Reveal bookkeeping stored on the element itself.
    fn mark(&self) -> Option<RevealMark>;

    fn set_mark(&self, mark: Option<RevealMark>);

    /// Apply the final visual state.
    fn apply(&self, style: &crate::RevealStyle);
}

/// Per-element ownership marker.
///
/// Stored on the element so that two controllers activated over the same
/// document never watch the same element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMark {
    /// Watched by the controller with this id.
    Claimed(ControllerId),
    /// Already revealed; never watched again.
    Revealed,
}

impl RevealMark {
    /// Encoding used for string attributes (`data-reveal`).
    pub fn encode(&self) -> String {
        match self {
            RevealMark::Claimed(id) => format!("claimed:{}", id.0),
            RevealMark::Revealed => "revealed".to_string(),
        }
    }

    pub fn decode(value: &str) -> Option<Self> {
        if value == "revealed" {
            return Some(RevealMark::Revealed);
        }
        value
            .strip_prefix("claimed:")
            .and_then(|id| id.parse().ok())
            .map(|id| RevealMark::Claimed(ControllerId(id)))
    }
}

/// Identity of one controller instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        ControllerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One visibility notification.
#[derive(Debug, Clone)]
pub struct VisibilityEntry<T> {
    pub target: T,
    pub is_intersecting: bool,
    /// Fraction of the target's area inside the (inset) viewport, `0.0..=1.0`.
    pub intersection_ratio: f64,
}

impl<T> VisibilityEntry<T> {
    /// Whether this entry reports the target as visible enough to reveal.
    pub fn is_visible_enough(&self, options: &WatchOptions) -> bool {
        self.is_intersecting && self.intersection_ratio >= options.threshold
    }
}

/// Margins applied to the viewport before intersection is computed, in CSS
/// pixels. Negative values shrink the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMargin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl RootMargin {
    /// CSS shorthand in top/right/bottom/left order.
    pub fn to_css(&self) -> String {
        format!(
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl Default for RootMargin {
    /// 50px early trigger on the bottom edge.
    fn default() -> Self {
        Self {
            top: 0,
            right: 0,
            bottom: -50,
            left: 0,
        }
    }
}

/// Configuration for the shared watcher.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchOptions {
    /// Minimum visible fraction of the target.
    pub threshold: f64,
    pub root_margin: RootMargin,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::default(),
        }
    }
}
