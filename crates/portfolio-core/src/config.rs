//! Motion constants for the portfolio page.
//!
//! Every timing and easing value the page uses lives here. They are fixed at
//! compile time; [`MotionConfig`] only groups them so components can take one
//! value instead of a dozen.

use std::time::Duration;

use crate::error::{PortfolioError, Result};

// === CURSOR ===

/// Fraction of the remaining distance the ring covers each frame.
/// Lower = more lag.
pub const CATCH_UP_RATE: f64 = 0.12;
/// Half the dot's size, subtracted so the dot is centred on the pointer
pub const DOT_OFFSET: f64 = 5.0;
/// Half the ring's size
pub const RING_OFFSET: f64 = 16.0;
/// Frame cadence for the cursor loop (~60fps)
pub const FRAME_INTERVAL_MS: u64 = 16;

// === NAV ===

/// Vertical scroll offset past which the nav gets the `scrolled` marker
pub const SCROLL_THRESHOLD: f64 = 20.0;

// === TYPEWRITER ===

/// Delay between typed characters (ms)
pub const TYPING_SPEED_MS: u64 = 65;
/// Delay between deleted characters (ms)
pub const DELETE_SPEED_MS: u64 = 35;
/// Hold on a fully typed phrase (ms)
pub const PAUSE_AFTER_WORD_MS: u64 = 1800;
/// Hold on an empty line before the next phrase (ms)
pub const PAUSE_BEFORE_NEXT_MS: u64 = 400;
/// Wait before the first character so the hero can animate in (ms)
pub const STARTUP_DELAY_MS: u64 = 1400;

/// Phrases the hero typewriter cycles through
pub const PHRASES: &[&str] = &[
    "building data pipelines.",
    "upskilling.",
    "automating the boring stuff.",
    "creating databases.",
    "vibe-coding.",
];

// === REVEAL ===

/// Visible fraction at which a reveal element triggers
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Extra delay per position inside one reveal batch (ms)
pub const REVEAL_STAGGER_MS: u64 = 80;

/// Typewriter timings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub typing: Duration,
    pub deleting: Duration,
    pub pause_after_word: Duration,
    pub pause_before_next: Duration,
    pub startup: Duration,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(TYPING_SPEED_MS),
            deleting: Duration::from_millis(DELETE_SPEED_MS),
            pause_after_word: Duration::from_millis(PAUSE_AFTER_WORD_MS),
            pause_before_next: Duration::from_millis(PAUSE_BEFORE_NEXT_MS),
            startup: Duration::from_millis(STARTUP_DELAY_MS),
        }
    }
}

/// All motion settings for one page
#[derive(Debug, Clone, PartialEq)]
pub struct MotionConfig {
    pub catch_up_rate: f64,
    pub dot_offset: f64,
    pub ring_offset: f64,
    pub frame_interval: Duration,
    pub scroll_threshold: f64,
    pub typewriter: TypewriterTiming,
    pub reveal_threshold: f64,
    pub reveal_stagger: Duration,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            catch_up_rate: CATCH_UP_RATE,
            dot_offset: DOT_OFFSET,
            ring_offset: RING_OFFSET,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            scroll_threshold: SCROLL_THRESHOLD,
            typewriter: TypewriterTiming::default(),
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_stagger: Duration::from_millis(REVEAL_STAGGER_MS),
        }
    }
}

impl MotionConfig {
    /// Check the values the state machines rely on.
    pub fn validate(&self) -> Result<()> {
        if !(self.catch_up_rate > 0.0 && self.catch_up_rate <= 1.0) {
            return Err(PortfolioError::InvalidCatchUp(self.catch_up_rate));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PortfolioError::InvalidThreshold(self.reveal_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MotionConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_catch_up() {
        let config = MotionConfig {
            catch_up_rate: 0.0,
            ..MotionConfig::default()
        };
        assert_eq!(config.validate(), Err(PortfolioError::InvalidCatchUp(0.0)));
    }

    #[test]
    fn rejects_threshold_above_one() {
        let config = MotionConfig {
            reveal_threshold: 1.2,
            ..MotionConfig::default()
        };
        assert_eq!(config.validate(), Err(PortfolioError::InvalidThreshold(1.2)));
    }

    #[test]
    fn phrase_list_is_not_empty() {
        assert!(!PHRASES.is_empty());
    }
}
