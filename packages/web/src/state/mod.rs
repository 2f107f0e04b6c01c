//! Shared UI state

use dioxus::prelude::*;

/// Mobile navigation menu state
#[derive(Clone, Copy)]
pub struct MenuState {
    pub is_open: Signal<bool>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
        }
    }

    pub fn toggle(&mut self) {
        let next = !*self.is_open.peek();
        self.is_open.set(next);
    }

    pub fn close(&mut self) {
        self.is_open.set(false);
    }
}

/// Whether the page has scrolled far enough for the compact navbar
pub const SCROLL_THRESHOLD: f64 = 20.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(400.0));
    }
}
