//! Nav bar `scrolled` marker.

use crate::config::SCROLL_THRESHOLD;

/// Whether the page has scrolled past the nav threshold.
///
/// A pure function of the latest offset; there is no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavScrollState {
    threshold: f64,
    scrolled: bool,
}

impl Default for NavScrollState {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

impl NavScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Apply a scroll offset. Returns true if the marker flipped.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// CSS class list for the nav element
    pub fn class(&self) -> &'static str {
        if self.scrolled {
            "nav scrolled"
        } else {
            "nav"
        }
    }
}
