//! One-shot scroll reveal.
//!
//! Elements start pending. The first poll that sees an element at or above
//! the visibility threshold moves it to `Scheduled` with a stagger delay
//! based on its position in that poll's batch; once the delay has elapsed
//! the caller marks it `Revealed`. Neither transition is ever undone, and a
//! scheduled element is never probed again.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::config::{REVEAL_STAGGER_MS, REVEAL_THRESHOLD};
use crate::error::{PortfolioError, Result};

/// A vertical extent in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub height: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `element` that lies inside `viewport`, in `[0, 1]`.
///
/// A zero-height element counts as fully visible when it sits inside the
/// viewport and invisible otherwise.
pub fn intersection_ratio(element: Span, viewport: Span) -> f64 {
    if element.height <= 0.0 {
        let inside = element.top >= viewport.top && element.top <= viewport.bottom();
        return if inside { 1.0 } else { 0.0 };
    }
    let overlap = element.bottom().min(viewport.bottom()) - element.top.max(viewport.top);
    (overlap / element.height).clamp(0.0, 1.0)
}

/// Source of visibility fractions for tracked elements.
///
/// `None` means the element could not be measured this time; it stays
/// pending.
pub trait VisibilityProbe<K> {
    fn visible_fraction(&self, key: &K) -> Option<f64>;
}

impl<K: Eq + Hash> VisibilityProbe<K> for HashMap<K, f64> {
    fn visible_fraction(&self, key: &K) -> Option<f64> {
        self.get(key).copied()
    }
}

/// Lifecycle of an element that has left the pending list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Crossed the threshold; waiting out its stagger delay
    Scheduled,
    /// Visible marker applied
    Revealed,
}

/// An element that crossed the threshold in a poll
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledReveal<K> {
    pub key: K,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    pending: Vec<K>,
    settled: HashMap<K, Settled>,
    threshold: f64,
    stagger: Duration,
}

impl<K: Clone + Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            settled: HashMap::new(),
            threshold: REVEAL_THRESHOLD,
            stagger: Duration::from_millis(REVEAL_STAGGER_MS),
        }
    }
}

impl<K: Clone + Eq + Hash> RevealTracker<K> {
    pub fn new(threshold: f64, stagger: Duration) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(PortfolioError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            stagger,
            ..Self::default()
        })
    }

    /// Start observing `key`. Registering a known key does nothing.
    pub fn observe(&mut self, key: K) {
        if self.settled.contains_key(&key) || self.pending.contains(&key) {
            return;
        }
        self.pending.push(key);
    }

    /// Keys still being observed, in registration order
    pub fn pending(&self) -> &[K] {
        &self.pending
    }

    pub fn state(&self, key: &K) -> Option<Settled> {
        self.settled.get(key).copied()
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.state(key) == Some(Settled::Revealed)
    }

    /// Check every pending element once and schedule the ones that crossed
    /// the threshold. The n-th element to trigger in this batch gets a delay
    /// of `n * stagger`.
    pub fn poll<P>(&mut self, probe: &P) -> Vec<ScheduledReveal<K>>
    where
        P: VisibilityProbe<K> + ?Sized,
    {
        let threshold = self.threshold;
        let mut batch = Vec::new();

        self.pending.retain(|key| {
            let crossed = probe
                .visible_fraction(key)
                .is_some_and(|fraction| fraction > 0.0 && fraction >= threshold);
            if crossed {
                batch.push(key.clone());
            }
            !crossed
        });

        batch
            .into_iter()
            .enumerate()
            .map(|(position, key)| {
                self.settled.insert(key.clone(), Settled::Scheduled);
                ScheduledReveal {
                    key,
                    delay: self.stagger * position as u32,
                }
            })
            .collect()
    }

    /// Apply the visible marker to a scheduled element.
    ///
    /// Returns false if the key was never scheduled or is already revealed.
    pub fn mark_revealed(&mut self, key: &K) -> bool {
        match self.settled.get_mut(key) {
            Some(state @ Settled::Scheduled) => {
                *state = Settled::Revealed;
                true
            }
            _ => false,
        }
    }

    /// CSS class list for a reveal element
    pub fn class(&self, key: &K) -> &'static str {
        if self.is_revealed(key) {
            "reveal visible"
        } else {
            "reveal"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partially_visible_element() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(700.0, 200.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Span::new(900.0, 200.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Span::new(-100.0, 100.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Span::new(100.0, 100.0), viewport), 1.0);
    }

    #[test]
    fn zero_height_element_inside_viewport_is_visible() {
        let viewport = Span::new(0.0, 800.0);
        assert_eq!(intersection_ratio(Span::new(10.0, 0.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Span::new(810.0, 0.0), viewport), 0.0);
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut tracker = RevealTracker::default();
        tracker.observe("about");
        let probe = HashMap::from([("about", 0.05)]);
        assert!(tracker.poll(&probe).is_empty());
        assert_eq!(tracker.pending(), &["about"]);
    }

    #[test]
    fn batch_is_staggered_in_order() {
        let mut tracker = RevealTracker::default();
        for key in ["a", "b", "c", "d"] {
            tracker.observe(key);
        }
        let probe = HashMap::from([("a", 0.5), ("b", 0.0), ("c", 0.2), ("d", 1.0)]);
        let batch = tracker.poll(&probe);

        let got: Vec<_> = batch.iter().map(|r| (r.key, r.delay.as_millis())).collect();
        assert_eq!(got, vec![("a", 0), ("c", 80), ("d", 160)]);
        assert_eq!(tracker.pending(), &["b"]);
    }

    #[test]
    fn scheduled_once_revealed_once() {
        let mut tracker = RevealTracker::default();
        tracker.observe(1);
        let visible = HashMap::from([(1, 1.0)]);

        assert_eq!(tracker.poll(&visible).len(), 1);
        assert_eq!(tracker.state(&1), Some(Settled::Scheduled));
        assert!(tracker.poll(&visible).is_empty());

        assert!(tracker.mark_revealed(&1));
        assert!(!tracker.mark_revealed(&1));
        assert_eq!(tracker.class(&1), "reveal visible");
    }

    #[test]
    fn reobserving_settled_key_is_ignored() {
        let mut tracker = RevealTracker::default();
        tracker.observe("x");
        tracker.observe("x");
        assert_eq!(tracker.pending().len(), 1);

        tracker.poll(&HashMap::from([("x", 1.0)]));
        tracker.observe("x");
        assert!(tracker.pending().is_empty());
    }

    #[test]
    fn unmeasured_elements_stay_pending() {
        let mut tracker = RevealTracker::default();
        tracker.observe("ghost");
        assert!(tracker.poll(&HashMap::<&str, f64>::new()).is_empty());
        assert_eq!(tracker.pending(), &["ghost"]);
    }

    #[test]
    fn unknown_key_cannot_be_revealed() {
        let mut tracker: RevealTracker<&str> = RevealTracker::default();
        assert!(!tracker.mark_revealed(&"nope"));
        assert_eq!(tracker.class(&"nope"), "reveal");
    }

    #[test]
    fn rejects_bad_threshold() {
        assert!(RevealTracker::<u8>::new(-0.1, Duration::ZERO).is_err());
    }
}
