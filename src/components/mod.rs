//! UI Components for the portfolio page.
//!
//! Each animated component owns its own state machine from
//! `portfolio_core`; none of them read each other's state.

mod cursor;
mod mobile_nav;
mod nav_header;
pub mod reveal;
mod typewriter;

pub use cursor::CursorLayer;
pub use nav_header::NavHeader;
pub use reveal::Reveal;
pub use typewriter::Typewriter;
