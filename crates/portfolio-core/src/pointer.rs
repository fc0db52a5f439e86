//! Custom cursor: a dot that snaps to the pointer and a ring that eases
//! toward it.
//!
//! Pointer moves only record coordinates. Rendering happens on frame ticks,
//! where the ring closes a fixed fraction of the remaining distance
//! (exponential decay), so the lag looks the same at any distance.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::config::{CATCH_UP_RATE, DOT_OFFSET, RING_OFFSET};
use crate::error::{PortfolioError, Result};

/// Below this distance the ring snaps onto the pointer and stops moving.
const SETTLE_EPSILON: f64 = 0.01;

/// A point in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn offset_by(self, d: f64) -> Self {
        Self::new(self.x - d, self.y - d)
    }

    /// CSS transform placing an element's top-left corner at this point
    pub fn translate(&self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

/// Where to draw both markers for one frame (top-left corners)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFrame {
    pub dot: Point,
    pub ring: Point,
}

/// State for the two-marker cursor
#[derive(Debug, Clone, PartialEq)]
pub struct PointerFollower {
    pointer: Point,
    ring: Point,
    catch_up: f64,
    dot_offset: f64,
    ring_offset: f64,
}

impl Default for PointerFollower {
    fn default() -> Self {
        Self {
            pointer: Point::ORIGIN,
            ring: Point::ORIGIN,
            catch_up: CATCH_UP_RATE,
            dot_offset: DOT_OFFSET,
            ring_offset: RING_OFFSET,
        }
    }
}

impl PointerFollower {
    /// Create a follower with the default marker sizes.
    ///
    /// `catch_up` must be in `(0, 1]`; 1 means no lag at all.
    pub fn new(catch_up: f64) -> Result<Self> {
        Self::with_offsets(catch_up, DOT_OFFSET, RING_OFFSET)
    }

    pub fn with_offsets(catch_up: f64, dot_offset: f64, ring_offset: f64) -> Result<Self> {
        if !(catch_up > 0.0 && catch_up <= 1.0) {
            return Err(PortfolioError::InvalidCatchUp(catch_up));
        }
        Ok(Self {
            pointer: Point::ORIGIN,
            ring: Point::ORIGIN,
            catch_up,
            dot_offset,
            ring_offset,
        })
    }

    /// Record the latest pointer position. Only the latest value matters.
    pub fn on_pointer_move(&mut self, at: Point) {
        self.pointer = at;
    }

    /// Latest recorded pointer position
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Current (uncentred) ring position
    pub fn follower(&self) -> Point {
        self.ring
    }

    /// Advance the ring one frame and return where to draw both markers.
    pub fn tick(&mut self) -> CursorFrame {
        let dx = self.pointer.x - self.ring.x;
        let dy = self.pointer.y - self.ring.y;

        if dx.abs() < SETTLE_EPSILON && dy.abs() < SETTLE_EPSILON {
            self.ring = self.pointer;
        } else {
            self.ring.x += dx * self.catch_up;
            self.ring.y += dy * self.catch_up;
        }

        self.frame()
    }

    /// Marker positions without advancing
    pub fn frame(&self) -> CursorFrame {
        CursorFrame {
            dot: self.pointer.offset_by(self.dot_offset),
            ring: self.ring.offset_by(self.ring_offset),
        }
    }
}

/// Start/stop handle for a frame loop.
///
/// Cloning shares the handle; stopping any clone stops the loop.
#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    token: CancellationToken,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.token.cancel();
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run at most `frames` ticks synchronously, stopping early if the
    /// handle is stopped.
    pub fn run_for(&self, follower: &mut PointerFollower, frames: usize) -> Vec<CursorFrame> {
        let mut rendered = Vec::with_capacity(frames);
        for _ in 0..frames {
            if !self.is_running() {
                break;
            }
            rendered.push(follower.tick());
        }
        rendered
    }

    /// Token that resolves once the loop is stopped
    pub fn cancelled(&self) -> tokio_util::sync::WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}

/// Call `on_frame` every `interval` until `handle` is stopped.
///
/// Late ticks are skipped rather than bunched, matching how a display
/// refresh drops frames under load. Returns the number of frames run.
pub async fn drive_frames<F>(handle: FrameLoop, interval: Duration, mut on_frame: F) -> u64
where
    F: FnMut(),
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut frames = 0u64;

    tracing::debug!(?interval, "cursor frame loop started");
    loop {
        tokio::select! {
            _ = handle.cancelled() => break,
            _ = ticker.tick() => {
                on_frame();
                frames += 1;
            }
        }
    }
    tracing::debug!(frames, "cursor frame loop stopped");
    frames
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_start_at_origin() {
        let follower = PointerFollower::default();
        let frame = follower.frame();
        assert_eq!(frame.dot, Point::new(-5.0, -5.0));
        assert_eq!(frame.ring, Point::new(-16.0, -16.0));
    }

    #[test]
    fn dot_tracks_pointer_without_lag() {
        let mut follower = PointerFollower::new(0.12).unwrap();
        follower.on_pointer_move(Point::new(100.0, 50.0));
        let frame = follower.tick();
        assert_eq!(frame.dot, Point::new(95.0, 45.0));
    }

    #[test]
    fn ring_moves_fraction_of_distance() {
        let mut follower = PointerFollower::new(0.12).unwrap();
        follower.on_pointer_move(Point::new(100.0, 200.0));
        follower.tick();
        let ring = follower.follower();
        assert!((ring.x - 12.0).abs() < 1e-9);
        assert!((ring.y - 24.0).abs() < 1e-9);
    }

    #[test]
    fn ring_settles_exactly_on_pointer() {
        let mut follower = PointerFollower::new(0.5).unwrap();
        follower.on_pointer_move(Point::new(10.0, 10.0));
        FrameLoop::new().run_for(&mut follower, 200);
        assert_eq!(follower.follower(), Point::new(10.0, 10.0));
    }

    #[test]
    fn full_catch_up_has_no_lag() {
        let mut follower = PointerFollower::new(1.0).unwrap();
        follower.on_pointer_move(Point::new(-3.0, 7.0));
        follower.tick();
        assert_eq!(follower.follower(), Point::new(-3.0, 7.0));
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(PointerFollower::new(0.0).is_err());
        assert!(PointerFollower::new(1.01).is_err());
        assert!(PointerFollower::new(f64::NAN).is_err());
    }

    #[test]
    fn stopped_loop_runs_nothing() {
        let mut follower = PointerFollower::new(0.12).unwrap();
        let frames = FrameLoop::new();
        frames.stop();
        assert!(!frames.is_running());
        assert!(frames.run_for(&mut follower, 10).is_empty());
    }

    #[test]
    fn translate_formats_css() {
        assert_eq!(Point::new(1.5, -2.0).translate(), "translate(1.5px, -2px)");
    }
}
