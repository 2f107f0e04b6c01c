//! Reveal intents and the visual state each one ends in.
//!
//! Elements opt into the reveal behaviour by carrying one of three CSS
//! classes. The class decides the start offset (set by the stylesheet) and
//! the target state applied once the element is revealed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual transition requested by an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealIntent {
    /// Starts displaced downwards, settles vertically.
    FadeUp,
    /// Starts displaced to the left, settles horizontally.
    FadeFromLeft,
    /// Starts displaced to the right, settles horizontally.
    FadeFromRight,
}

impl RevealIntent {
    /// All intents in precedence order.
    ///
    /// When an element carries more than one reveal class, the first intent
    /// in this list whose class is present wins.
    pub const PRECEDENCE: [RevealIntent; 3] = [
        RevealIntent::FadeUp,
        RevealIntent::FadeFromLeft,
        RevealIntent::FadeFromRight,
    ];

    /// CSS selector matching every tagged element.
    pub const SELECTOR: &'static str = ".fade-in, .fade-left, .fade-right";

    /// The class name that tags an element with this intent.
    pub fn class_name(&self) -> &'static str {
        match self {
            RevealIntent::FadeUp => "fade-in",
            RevealIntent::FadeFromLeft => "fade-left",
            RevealIntent::FadeFromRight => "fade-right",
        }
    }

    /// Resolve the intent of an element from its class membership.
    ///
    /// Returns `None` when the element carries no reveal class.
    pub fn resolve(has_class: impl Fn(&str) -> bool) -> Option<Self> {
        Self::PRECEDENCE
            .into_iter()
            .find(|intent| has_class(intent.class_name()))
    }

    /// The state the element is moved to when revealed.
    pub fn target_style(&self) -> RevealStyle {
        let axis = match self {
            RevealIntent::FadeUp => Axis::Vertical,
            RevealIntent::FadeFromLeft | RevealIntent::FadeFromRight => Axis::Horizontal,
        };
        RevealStyle { opacity: 1.0, axis }
    }
}

impl fmt::Display for RevealIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Error returned when a string is not a reveal class.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not a reveal class: {0:?}")]
pub struct UnknownIntent(pub String);

impl FromStr for RevealIntent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::PRECEDENCE
            .into_iter()
            .find(|intent| intent.class_name() == s)
            .ok_or_else(|| UnknownIntent(s.to_string()))
    }
}

/// Axis along which an element's start offset is neutralised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Final visual state of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f32,
    pub axis: Axis,
}

impl RevealStyle {
    /// Value for the `opacity` property.
    pub fn css_opacity(&self) -> String {
        self.opacity.to_string()
    }

    /// Value for the `transform` property.
    pub fn css_transform(&self) -> &'static str {
        match self.axis {
            Axis::Vertical => "translateY(0)",
            Axis::Horizontal => "translateX(0)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_single_class() {
        assert_eq!(
            RevealIntent::resolve(|c| c == "fade-left"),
            Some(RevealIntent::FadeFromLeft)
        );
        assert_eq!(RevealIntent::resolve(|c| c == "partner-logo"), None);
    }

    #[test]
    fn test_resolve_conflict_uses_precedence() {
        let classes = ["fade-right", "fade-in"];
        let intent = RevealIntent::resolve(|c| classes.contains(&c));
        assert_eq!(intent, Some(RevealIntent::FadeUp));

        let classes = ["fade-right", "fade-left"];
        let intent = RevealIntent::resolve(|c| classes.contains(&c));
        assert_eq!(intent, Some(RevealIntent::FadeFromLeft));
    }

    #[test]
    fn test_target_styles() {
        let up = RevealIntent::FadeUp.target_style();
        assert_eq!(up.css_opacity(), "1");
        assert_eq!(up.css_transform(), "translateY(0)");

        for intent in [RevealIntent::FadeFromLeft, RevealIntent::FadeFromRight] {
            let style = intent.target_style();
            assert_eq!(style.css_opacity(), "1");
            assert_eq!(style.css_transform(), "translateX(0)");
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("fade-in".parse(), Ok(RevealIntent::FadeUp));
        assert_eq!(
            "fade-out".parse::<RevealIntent>(),
            Err(UnknownIntent("fade-out".to_string()))
        );
    }

    #[test]
    fn test_selector_covers_every_intent() {
        for intent in RevealIntent::PRECEDENCE {
            assert!(RevealIntent::SELECTOR.contains(&format!(".{}", intent.class_name())));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&RevealIntent::FadeFromRight).unwrap();
        assert_eq!(json, "\"fade-from-right\"");
    }
}
