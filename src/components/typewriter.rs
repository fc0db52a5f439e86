//! Typewriter Component
//!
//! Types and deletes phrases one character at a time, forever. All
//! sequencing lives in [`PhraseCycler`]; this component only sleeps and
//! copies the current text into a signal.

use dioxus::prelude::*;
use portfolio_core::typewriter::drive;
use portfolio_core::PhraseCycler;
use tokio_util::sync::CancellationToken;

use crate::context::use_motion;

/// Properties for the Typewriter component
#[derive(Clone, PartialEq, Props)]
pub struct TypewriterProps {
    /// Phrases to cycle through, in order
    pub phrases: Vec<String>,
}

/// Animated typewriter text with a blinking caret
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     h2 { "I'm " Typewriter { phrases: vec!["building things.".into()] } }
/// }
/// ```
#[component]
pub fn Typewriter(props: TypewriterProps) -> Element {
    let config = use_motion();
    let mut text = use_signal(String::new);

    let stop = use_hook(CancellationToken::new);
    use_drop({
        let stop = stop.clone();
        move || stop.cancel()
    });

    let timing = config.typewriter;
    use_future(move || {
        let phrases = props.phrases.clone();
        let stop = stop.clone();
        async move {
            match PhraseCycler::with_timing(phrases, timing) {
                Ok(cycler) => {
                    drive(cycler, stop, move |cycler| text.set(cycler.text().to_string())).await;
                }
                Err(e) => tracing::warn!("Typewriter disabled: {}", e),
            }
        }
    });

    rsx! {
        span { class: "typewriter-wrap",
            span { id: "typewriter", class: "typewriter", "{text}" }
            span { class: "typewriter-caret", "aria-hidden": "true", "|" }
        }
    }
}
