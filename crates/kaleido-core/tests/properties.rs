//! Property-based tests for the collection and its traversal orders
//!
//! These tests verify the invariants every traversal must keep:
//!  - Canonical storage is never reordered by a traversal
//!  - Every order is a permutation of the canonical contents
//!  - Sorting orders are sorted; reverse round-trips
//!  - Removal drops every occurrence and fails only when nothing matched

use kaleido_core::{CollectionError, MultiView, Order};
use proptest::prelude::*;

/// Generate strategies for prop-testing

fn values_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-20i32..20, 0..40)
}

fn collection_strategy() -> impl Strategy<Value = MultiView<i32>> {
    values_strategy().prop_map(|values| {
        let mut c = MultiView::new();
        for v in values {
            c.add(v);
        }
        c
    })
}

#[derive(Clone, Debug)]
enum Op {
    Add(i32),
    Remove(i32),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0i32..10).prop_map(Op::Add),
            1 => (0i32..10).prop_map(Op::Remove),
        ],
        0..60,
    )
}

fn sorted(values: &[i32]) -> Vec<i32> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v
}

fn walk(c: &MultiView<i32>, order: Order) -> Vec<i32> {
    let (mut it, end) = c.traverse(order).into_parts();
    let mut out = Vec::new();
    while it != end {
        out.push(*it.get());
        it.advance();
    }
    out
}

// ============================================================================
// Size and canonical order
// ============================================================================

proptest! {
    #[test]
    fn size_tracks_adds_minus_removed(ops in ops_strategy()) {
        let mut c = MultiView::new();
        let mut model: Vec<i32> = Vec::new();
        let mut adds = 0usize;
        let mut removed = 0usize;

        for op in ops {
            match op {
                Op::Add(v) => {
                    c.add(v);
                    model.push(v);
                    adds += 1;
                }
                Op::Remove(v) => {
                    let before = c.size();
                    match c.remove(&v) {
                        Ok(()) => removed += before - c.size(),
                        Err(CollectionError::ElementNotFound) => {
                            prop_assert_eq!(c.size(), before);
                        }
                    }
                    model.retain(|x| *x != v);
                }
            }
            prop_assert_eq!(c.size(), adds - removed);
            prop_assert_eq!(walk(&c, Order::Insertion), model.clone());
        }
    }

    #[test]
    fn remove_drops_exactly_the_occurrences(c in collection_strategy(), target in -20i32..20) {
        let mut c = c;
        let before = c.size();
        let k = c.count(&target);

        let result = c.remove(&target);
        if k == 0 {
            prop_assert_eq!(result, Err(CollectionError::ElementNotFound));
            prop_assert_eq!(c.size(), before);
        } else {
            prop_assert_eq!(result, Ok(()));
            prop_assert_eq!(c.size(), before - k);
            prop_assert!(!c.contains(&target));
        }
    }

    #[test]
    fn traversals_leave_storage_alone(c in collection_strategy()) {
        let canonical = c.as_slice().to_vec();
        for order in Order::ALL {
            let _ = walk(&c, order);
        }
        prop_assert_eq!(c.as_slice(), canonical.as_slice());
    }
}

// ============================================================================
// Ordering properties
// ============================================================================

proptest! {
    #[test]
    fn every_order_is_a_permutation(c in collection_strategy()) {
        let expected = sorted(c.as_slice());
        for order in Order::ALL {
            let seen = walk(&c, order);
            prop_assert_eq!(seen.len(), c.size());
            prop_assert_eq!(sorted(&seen), expected.clone());
        }
    }

    #[test]
    fn ascending_and_descending_are_sorted(c in collection_strategy()) {
        let asc = walk(&c, Order::Ascending);
        prop_assert!(asc.windows(2).all(|w| w[0] <= w[1]));

        let mut desc = walk(&c, Order::Descending);
        prop_assert!(desc.windows(2).all(|w| w[0] >= w[1]));
        desc.reverse();
        prop_assert_eq!(desc, asc);
    }

    #[test]
    fn reverse_round_trips(c in collection_strategy()) {
        let once: MultiView<i32> = c.reverse_order().into_iter().collect();
        let twice = walk(&once, Order::Reverse);
        prop_assert_eq!(twice.as_slice(), c.as_slice());
    }

    #[test]
    fn side_cross_alternates_low_and_high(c in collection_strategy()) {
        let asc = walk(&c, Order::Ascending);
        let cross = walk(&c, Order::SideCross);
        let n = asc.len();
        for (i, v) in cross.iter().enumerate() {
            let expected = if i % 2 == 0 { asc[i / 2] } else { asc[n - 1 - i / 2] };
            prop_assert_eq!(*v, expected);
        }
    }

    #[test]
    fn middle_out_starts_at_half(values in prop::collection::vec(any::<i32>(), 1..40)) {
        let c: MultiView<i32> = values.iter().copied().collect();
        let out = walk(&c, Order::MiddleOut);
        prop_assert_eq!(out[0], values[values.len() / 2]);
    }

    #[test]
    fn producers_are_idempotent(c in collection_strategy()) {
        for order in Order::ALL {
            prop_assert_eq!(walk(&c, order), walk(&c, order));
        }
    }
}
