//! Typewriter phrase cycler.
//!
//! ## State machine
//!
//! ```text
//!            type 1 char                       delete 1 char
//!          ┌──────────┐                       ┌──────────┐
//!          ▼          │   full   (pause)      ▼          │
//!  start ─► Typing ───┴──────► HoldingFull ─► Deleting ──┴─┐
//!            ▲                                             │ empty
//!            └──────────── HoldingEmpty ◄──────────────────┘
//!                 (pause)      (index advances)
//! ```
//!
//! [`PhraseCycler::step`] applies exactly one transition and returns how long
//! to wait before the next one. Nothing here touches a timer; [`drive`] is the
//! single place that sleeps.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::TypewriterTiming;
use crate::error::{PortfolioError, Result};

/// Where the cycler is between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Revealing one more character per tick
    Typing,
    /// Phrase fully shown; next tick starts deleting
    HoldingFull,
    /// Hiding one character per tick
    Deleting,
    /// Line empty and index already advanced; next tick starts typing
    HoldingEmpty,
}

#[derive(Debug, Clone)]
pub struct PhraseCycler {
    phrases: Vec<String>,
    index: usize,
    revealed: usize,
    phase: Phase,
    timing: TypewriterTiming,
}

impl PhraseCycler {
    /// Build a cycler with the default timings.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_timing(phrases, TypewriterTiming::default())
    }

    pub fn with_timing<I, S>(phrases: I, timing: TypewriterTiming) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PortfolioError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            revealed: 0,
            phase: Phase::Typing,
            timing,
        })
    }

    pub fn timing(&self) -> &TypewriterTiming {
        &self.timing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Characters of the current phrase currently shown
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn current_phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    /// Text to display right now: the first `revealed` characters of the
    /// current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.revealed) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Apply one tick and return the delay before the next.
    pub fn step(&mut self) -> Duration {
        match self.phase {
            Phase::Typing | Phase::HoldingEmpty => {
                let len = self.current_phrase().chars().count();
                self.revealed = (self.revealed + 1).min(len);
                if self.revealed == len {
                    self.phase = Phase::HoldingFull;
                    tracing::trace!(index = self.index, "phrase typed");
                    self.timing.pause_after_word
                } else {
                    self.phase = Phase::Typing;
                    self.timing.typing
                }
            }
            Phase::Deleting | Phase::HoldingFull => {
                self.revealed = self.revealed.saturating_sub(1);
                if self.revealed == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.phase = Phase::HoldingEmpty;
                    tracing::trace!(next = self.index, "phrase cleared");
                    self.timing.pause_before_next
                } else {
                    self.phase = Phase::Deleting;
                    self.timing.deleting
                }
            }
        }
    }
}

/// Run the cycler on tokio time until `stop` is cancelled.
///
/// Waits the startup delay, then repeatedly steps and sleeps for whatever
/// delay the step asked for. `render` sees the cycler after every step.
/// Returns the cycler in its final state.
pub async fn drive<F>(mut cycler: PhraseCycler, stop: CancellationToken, mut render: F) -> PhraseCycler
where
    F: FnMut(&PhraseCycler),
{
    let mut delay = cycler.timing.startup;
    loop {
        tokio::select! {
            _ = stop.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }
        delay = cycler.step();
        render(&cycler);
    }
    tracing::debug!(index = cycler.index, "typewriter stopped");
    cycler
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        let phrases: Vec<String> = Vec::new();
        assert_eq!(PhraseCycler::new(phrases).unwrap_err(), PortfolioError::EmptyPhrases);
    }

    #[test]
    fn single_phrase_types_deletes_and_retypes() {
        let timing = TypewriterTiming::default();
        let mut cycler = PhraseCycler::new(["ab"]).unwrap();
        assert_eq!(cycler.text(), "");

        assert_eq!(cycler.step(), timing.typing);
        assert_eq!(cycler.text(), "a");

        assert_eq!(cycler.step(), timing.pause_after_word);
        assert_eq!(cycler.text(), "ab");
        assert_eq!(cycler.phase(), Phase::HoldingFull);

        assert_eq!(cycler.step(), timing.deleting);
        assert_eq!(cycler.text(), "a");

        assert_eq!(cycler.step(), timing.pause_before_next);
        assert_eq!(cycler.text(), "");
        assert_eq!(cycler.phrase_index(), 0);

        cycler.step();
        assert_eq!(cycler.text(), "a");
        assert_eq!(cycler.phase(), Phase::Typing);
    }

    #[test]
    fn slices_on_char_boundaries() {
        let mut cycler = PhraseCycler::new(["héllo"]).unwrap();
        cycler.step();
        cycler.step();
        assert_eq!(cycler.text(), "hé");
    }

    #[test]
    fn empty_phrase_does_not_stall() {
        let mut cycler = PhraseCycler::new(["", "x"]).unwrap();
        let pause = cycler.timing().pause_after_word;
        assert_eq!(cycler.step(), pause);
        cycler.step();
        assert_eq!(cycler.phrase_index(), 1);
        cycler.step();
        assert_eq!(cycler.text(), "x");
    }
}
