//! Property-based tests for showcase slide bookkeeping.
//!
//! Uses proptest to verify the index invariant: no sequence of
//! navigation operations ever takes the focused slide out of range.

use proptest::prelude::*;
use vitrine_ui::slides::{Align, SlideTracker};

/// Operations that can be performed on a tracker
#[derive(Debug, Clone, Copy)]
enum NavOp {
    Previous,
    Next,
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![Just(NavOp::Previous), Just(NavOp::Next)],
        0..max_ops,
    )
}

fn align_strategy() -> impl Strategy<Value = Align> {
    prop_oneof![Just(Align::Start), Just(Align::Center), Just(Align::End)]
}

proptest! {
    /// The focused index stays within [0, N-1] under any op sequence.
    #[test]
    fn index_stays_in_bounds(
        count in 1usize..64,
        align in align_strategy(),
        ops in nav_ops_strategy(256),
    ) {
        let mut tracker = SlideTracker::new(count, align);
        for op in ops {
            match op {
                NavOp::Previous => { tracker.previous(); }
                NavOp::Next => { tracker.next(); }
            }
            prop_assert!(tracker.current() < count);
        }
    }

    /// Previous never scrolls from the first slide; Next always scrolls.
    #[test]
    fn scroll_requests_match_transitions(
        count in 1usize..64,
        ops in nav_ops_strategy(256),
    ) {
        let mut tracker = SlideTracker::new(count, Align::Center);
        for op in ops {
            match op {
                NavOp::Previous => {
                    let before = tracker.current();
                    let request = tracker.previous();
                    if before == 0 {
                        prop_assert!(request.is_none());
                        prop_assert_eq!(tracker.current(), 0);
                    } else {
                        prop_assert_eq!(request.unwrap().slide, before - 1);
                    }
                }
                NavOp::Next => {
                    let request = tracker.next();
                    prop_assert_eq!(request.slide, tracker.current());
                    prop_assert_eq!(request.align, Align::Start);
                }
            }
        }
    }

    /// Shrinking the slide list keeps the focus in range.
    #[test]
    fn resize_keeps_focus_in_range(
        count in 1usize..64,
        new_count in 0usize..64,
        steps in 0usize..64,
    ) {
        let mut tracker = SlideTracker::new(count, Align::Center);
        for _ in 0..steps {
            tracker.next();
        }
        tracker.resize(new_count);
        prop_assert!(tracker.current() <= new_count.saturating_sub(1));
    }
}
