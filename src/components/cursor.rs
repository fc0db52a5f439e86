//! Custom Cursor Component
//!
//! Replaces the system cursor with a dot that sits on the pointer and a
//! ring that eases after it. Pointer moves only record coordinates; the
//! markers are redrawn by a frame loop that runs until the layer unmounts.

use dioxus::prelude::*;
use portfolio_core::pointer::drive_frames;
use portfolio_core::{FrameLoop, Point, PointerFollower};

use crate::context::use_motion;

/// Wraps the page, listening for pointer moves and drawing both markers
/// above it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CursorLayer {
///         div { class: "page", "..." }
///     }
/// }
/// ```
#[component]
pub fn CursorLayer(children: Element) -> Element {
    let config = use_motion();
    let mut follower = use_signal(|| {
        PointerFollower::with_offsets(config.catch_up_rate, config.dot_offset, config.ring_offset)
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default cursor easing: {}", e);
                PointerFollower::default()
            })
    });
    let mut rendered = use_signal(|| follower.peek().frame());

    let frames = use_hook(FrameLoop::new);
    use_drop({
        let frames = frames.clone();
        move || frames.stop()
    });

    let interval = config.frame_interval;
    use_future(move || {
        let frames = frames.clone();
        async move {
            drive_frames(frames, interval, move || {
                let frame = follower.write().tick();
                // Skip the re-render once the ring has settled
                if *rendered.peek() != frame {
                    rendered.set(frame);
                }
            })
            .await;
        }
    });

    let current = rendered();
    let dot = current.dot.translate();
    let ring = current.ring.translate();

    rsx! {
        div {
            class: "cursor-layer",
            onmousemove: move |evt: MouseEvent| {
                let at = evt.client_coordinates();
                follower.write().on_pointer_move(Point::new(at.x, at.y));
            },

            div { id: "cursor", class: "cursor", style: "transform: {dot};" }
            div { id: "cursorRing", class: "cursor-ring", style: "transform: {ring};" }

            {children}
        }
    }
}
