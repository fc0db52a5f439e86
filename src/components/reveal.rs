//! Scroll Reveal Component
//!
//! Wraps content that fades in the first time it scrolls into view. The
//! page's scroll handler calls [`poll_reveals`], which measures every
//! pending element against the viewport and hands the readings to the
//! shared [`RevealTracker`].

use std::collections::HashMap;
use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{
    intersection_ratio, MotionConfig, PortfolioError, RevealTracker, ScheduledReveal, Span,
};

/// Reveal state shared by the page and every [`Reveal`] wrapper
#[derive(Clone, Copy, PartialEq)]
pub struct RevealContext {
    pub tracker: Signal<RevealTracker<String>>,
    nodes: Signal<HashMap<String, Rc<MountedData>>>,
    viewport: Signal<Option<Rc<MountedData>>>,
}

impl RevealContext {
    pub fn new(config: &MotionConfig) -> Self {
        let tracker = RevealTracker::new(config.reveal_threshold, config.reveal_stagger)
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default reveal settings: {}", e);
                RevealTracker::default()
            });
        Self {
            tracker: Signal::new(tracker),
            nodes: Signal::new(HashMap::new()),
            viewport: Signal::new(None),
        }
    }

    /// Record the scroll container the reveals are measured against.
    pub fn set_viewport(mut self, node: Rc<MountedData>) {
        self.viewport.set(Some(node));
    }

    fn register(mut self, name: String, node: Rc<MountedData>) {
        self.tracker.write().observe(name.clone());
        self.nodes.write().insert(name, node);
    }
}

/// Hook to access the reveal context.
pub fn use_reveal() -> RevealContext {
    use_context::<RevealContext>()
}

async fn measure(node: &MountedData) -> Result<Span, PortfolioError> {
    let rect = node
        .get_client_rect()
        .await
        .map_err(|e| PortfolioError::Probe(e.to_string()))?;
    Ok(Span::new(rect.origin.y, rect.size.height))
}

/// Measure pending elements, schedule the ones that crossed the threshold
/// and mark each visible once its stagger delay has passed.
pub async fn poll_reveals(ctx: RevealContext, viewport: Rc<MountedData>) {
    let view = match measure(&viewport).await {
        Ok(span) => span,
        Err(e) => {
            tracing::warn!("Skipping reveal poll: {}", e);
            return;
        }
    };

    let pending: Vec<(String, Rc<MountedData>)> = {
        let nodes = ctx.nodes.peek();
        ctx.tracker
            .peek()
            .pending()
            .iter()
            .filter_map(|name| nodes.get(name).map(|node| (name.clone(), node.clone())))
            .collect()
    };
    if pending.is_empty() {
        return;
    }

    let mut fractions = HashMap::with_capacity(pending.len());
    for (name, node) in pending {
        match measure(&node).await {
            Ok(span) => {
                fractions.insert(name, intersection_ratio(span, view));
            }
            Err(e) => tracing::warn!(element = %name, "Skipping element: {}", e),
        }
    }

    let mut tracker = ctx.tracker;
    let batch = tracker.write().poll(&fractions);
    if !batch.is_empty() {
        tracing::debug!(count = batch.len(), "revealing batch");
    }

    for ScheduledReveal { key, delay } in batch {
        spawn(async move {
            tokio::time::sleep(delay).await;
            tracker.write().mark_revealed(&key);
        });
    }
}

/// Properties for the Reveal component
#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Unique name for this element
    pub name: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

/// Content that gains the `visible` marker once, the first time at least
/// the threshold fraction of it is on screen.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal { name: "about-card",
///         div { class: "card", "..." }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let ctx = use_reveal();
    let base_class = ctx.tracker.read().class(&props.name);
    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", base_class, extra),
        _ => base_class.to_string(),
    };

    let name = props.name.clone();
    rsx! {
        div {
            class: "{full_class}",
            onmounted: move |evt: MountedEvent| {
                let node = evt.data();
                ctx.register(name.clone(), node);
                // Catch elements that mount after the page's first poll
                if let Some(viewport) = ctx.viewport.peek().clone() {
                    spawn(poll_reveals(ctx, viewport));
                }
            },
            {props.children}
        }
    }
}
