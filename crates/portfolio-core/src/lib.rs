//! Portfolio Motion Core Library
//!
//! UI-independent state machines behind the portfolio page's motion:
//!
//! - [`pointer`]: two-marker custom cursor with an eased follower ring
//! - [`scroll`]: the nav bar's `scrolled` marker
//! - [`menu`]: the mobile hamburger menu
//! - [`typewriter`]: the hero's type/delete phrase cycler
//! - [`reveal`]: one-shot, staggered scroll reveals
//!
//! Each component owns its state and never reads another's. Timed behavior
//! is expressed as "apply one step, return the next delay", so tests can use
//! [`clock::VirtualClock`] or paused tokio time instead of real timers.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{PhraseCycler, config::PHRASES};
//!
//! let mut cycler = PhraseCycler::new(PHRASES.iter().copied())?;
//! let delay = cycler.step();
//! println!("{} (next in {:?})", cycler.text(), delay);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod menu;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod typewriter;

// Re-exports
pub use clock::VirtualClock;
pub use config::{MotionConfig, TypewriterTiming};
pub use error::{PortfolioError, Result};
pub use menu::MenuState;
pub use pointer::{CursorFrame, FrameLoop, Point, PointerFollower};
pub use reveal::{intersection_ratio, RevealTracker, ScheduledReveal, Settled, Span, VisibilityProbe};
pub use scroll::NavScrollState;
pub use typewriter::{Phase, PhraseCycler};
