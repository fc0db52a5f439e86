//! Motion config context for the portfolio page.
//!
//! The config is provided once by `App` and read by every animated
//! component, so they all agree on timings.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(MotionConfig::default);
//!
//! // In child components
//! let config = use_motion();
//! ```

use dioxus::prelude::*;
use portfolio_core::MotionConfig;

/// Hook to read the motion config from context.
pub fn use_motion() -> MotionConfig {
    use_context::<MotionConfig>()
}
