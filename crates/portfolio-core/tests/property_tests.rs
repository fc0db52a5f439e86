//! Property-based tests for the motion state machines
//!
//! Uses proptest to check the invariants that must hold for any input
//! sequence, not just the hand-picked ones in the unit tests.

use std::collections::HashMap;

use portfolio_core::{NavScrollState, Point, PointerFollower, PhraseCycler, RevealTracker};
use proptest::prelude::*;

/// Slack for floating point rounding in the lerp
const EPSILON: f64 = 1e-9;

// ============================================================================
// Strategy Generators
// ============================================================================

fn coordinate() -> impl Strategy<Value = f64> {
    -2000.0..2000.0f64
}

fn point_strategy() -> impl Strategy<Value = Point> {
    (coordinate(), coordinate()).prop_map(|(x, y)| Point::new(x, y))
}

/// Phrase lists including empty strings and multi-byte characters
fn phrases_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-zé ]{0,12}").expect("valid regex"), 1..6)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The dot is always exactly on the latest pointer position
    #[test]
    fn dot_has_zero_lag(moves in prop::collection::vec(point_strategy(), 1..50)) {
        let mut follower = PointerFollower::new(0.12).unwrap();
        for at in moves {
            follower.on_pointer_move(at);
            let frame = follower.tick();
            prop_assert_eq!(frame.dot, Point::new(at.x - 5.0, at.y - 5.0));
        }
    }

    /// With the pointer held still the ring closes in without overshooting
    #[test]
    fn ring_converges_monotonically(
        target in point_strategy(),
        rate in 0.01..=1.0f64,
        ticks in 1..300usize,
    ) {
        let mut follower = PointerFollower::new(rate).unwrap();
        follower.on_pointer_move(target);

        let mut last_dx = target.x.abs();
        let mut last_dy = target.y.abs();
        for _ in 0..ticks {
            follower.tick();
            let ring = follower.follower();
            let dx = (target.x - ring.x).abs();
            let dy = (target.y - ring.y).abs();
            prop_assert!(dx <= last_dx + EPSILON);
            prop_assert!(dy <= last_dy + EPSILON);
            // Same side of the target as where it started (origin)
            prop_assert!((target.x - ring.x) * target.x.signum() >= -EPSILON);
            prop_assert!((target.y - ring.y) * target.y.signum() >= -EPSILON);
            last_dx = dx;
            last_dy = dy;
        }
    }

    /// Scroll state depends only on the latest offset
    #[test]
    fn scroll_state_is_pure(offsets in prop::collection::vec(-100.0..500.0f64, 1..40)) {
        let mut nav = NavScrollState::default();
        for offset in offsets {
            nav.update(offset);
            prop_assert_eq!(nav.is_scrolled(), offset > 20.0);
        }
    }

    /// Displayed text is always a prefix of the current phrase of length
    /// `revealed`, and `revealed` never exceeds the phrase length
    #[test]
    fn cycler_text_is_prefix(phrases in phrases_strategy(), ticks in 0..400usize) {
        let mut cycler = PhraseCycler::new(phrases.clone()).unwrap();
        for _ in 0..ticks {
            cycler.step();
            let phrase = &phrases[cycler.phrase_index()];
            prop_assert!(cycler.revealed() <= phrase.chars().count());
            prop_assert!(phrase.starts_with(cycler.text()));
            prop_assert_eq!(cycler.text().chars().count(), cycler.revealed());
        }
    }

    /// Phrase index only ever advances by one, wrapping at the end
    #[test]
    fn cycler_never_skips_phrases(phrases in phrases_strategy(), ticks in 0..400usize) {
        let count = phrases.len();
        let mut cycler = PhraseCycler::new(phrases).unwrap();
        let mut last = cycler.phrase_index();
        for _ in 0..ticks {
            cycler.step();
            let index = cycler.phrase_index();
            prop_assert!(index == last || index == (last + 1) % count);
            last = index;
        }
    }

    /// An element reveals at most once whatever the visibility history
    #[test]
    fn reveal_is_one_shot(history in prop::collection::vec(0.0..=1.0f64, 1..30)) {
        let mut tracker = RevealTracker::default();
        tracker.observe("card");

        let mut scheduled = 0;
        for fraction in history {
            let probe = HashMap::from([("card", fraction)]);
            for reveal in tracker.poll(&probe) {
                scheduled += 1;
                prop_assert!(tracker.mark_revealed(&reveal.key));
            }
        }
        prop_assert!(scheduled <= 1);
        if scheduled == 1 {
            prop_assert!(tracker.is_revealed(&"card"));
        }
    }
}
