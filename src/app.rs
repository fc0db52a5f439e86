use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{MotionConfig, NavScrollState};

use crate::components::reveal::{poll_reveals, RevealContext};
use crate::components::{CursorLayer, NavHeader};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the motion config and reveal context, and owns
/// the page's scroll container.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(MotionConfig::default);
    let reveal = use_context_provider(|| RevealContext::new(&config));

    let mut nav = use_signal(|| NavScrollState::new(config.scroll_threshold));
    let mut viewport: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let on_scroll = move |_: ScrollEvent| {
        let Some(node) = viewport.peek().clone() else {
            return;
        };
        spawn(async move {
            match node.get_scroll_offset().await {
                Ok(offset) => {
                    if nav.write().update(offset.y) {
                        tracing::debug!(scrolled = nav.peek().is_scrolled(), offset = offset.y, "nav marker flipped");
                    }
                }
                Err(e) => tracing::warn!("Failed to read scroll offset: {}", e),
            }
            poll_reveals(reveal, node).await;
        });
    };

    rsx! {
        style { {GLOBAL_STYLES} }
        CursorLayer {
            div {
                class: "page",
                onmounted: move |evt: MountedEvent| {
                    let node = evt.data();
                    viewport.set(Some(node.clone()));
                    reveal.set_viewport(node.clone());
                    // Sections already on screen at load reveal without a scroll
                    spawn(poll_reveals(reveal, node));
                },
                onscroll: on_scroll,

                NavHeader { scroll: nav() }
                Home {}
            }
        }
    }
}
