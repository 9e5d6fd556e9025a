//! Traversal orderings.
//!
//! Each ordering is a plain function from a slice in canonical (insertion)
//! order to a freshly allocated `Vec` in the ordering's sequence. The
//! collection never reorders its own storage; cursors consume the returned
//! vector instead.
//!
//! Sorting orders compare with `PartialOrd`. Pairs that do not compare
//! (e.g. `f64::NAN`) are treated as equal, so the result is *a* permutation
//! but carries no ordering guarantee.

use crate::error::OrderParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// The six traversal strategies a [`MultiView`](crate::MultiView) exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Order {
    /// Canonical insertion order.
    Insertion,
    /// Stable sort by `<`.
    Ascending,
    /// Stable sort by `>`.
    Descending,
    /// Smallest remaining, largest remaining, alternating.
    SideCross,
    /// Insertion order reversed.
    Reverse,
    /// Center element first, then alternating outward.
    MiddleOut,
}

impl Order {
    /// Every ordering, in the order the demo prints them.
    pub const ALL: [Order; 6] = [
        Order::Ascending,
        Order::Descending,
        Order::SideCross,
        Order::Reverse,
        Order::Insertion,
        Order::MiddleOut,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Order::Insertion => "insertion",
            Order::Ascending => "ascending",
            Order::Descending => "descending",
            Order::SideCross => "side-cross",
            Order::Reverse => "reverse",
            Order::MiddleOut => "middle-out",
        }
    }

    /// Materialize `items` in this ordering.
    pub fn arrange<T: PartialOrd + Clone>(self, items: &[T]) -> Vec<T> {
        tracing::trace!(order = self.name(), len = items.len(), "materializing snapshot");
        match self {
            Order::Insertion => insertion(items),
            Order::Ascending => ascending(items),
            Order::Descending => descending(items),
            Order::SideCross => side_cross(items),
            Order::Reverse => reverse(items),
            Order::MiddleOut => middle_out(items),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Order {
    type Err = OrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" | "normal" | "order" => Ok(Order::Insertion),
            "ascending" | "asc" => Ok(Order::Ascending),
            "descending" | "desc" => Ok(Order::Descending),
            "side-cross" | "sidecross" | "side_cross" => Ok(Order::SideCross),
            "reverse" | "rev" => Ok(Order::Reverse),
            "middle-out" | "middleout" | "middle_out" => Ok(Order::MiddleOut),
            _ => Err(OrderParseError::Unknown(s.to_string())),
        }
    }
}

fn compare<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub fn insertion<T: Clone>(items: &[T]) -> Vec<T> {
    items.to_vec()
}

pub fn ascending<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare);
    sorted
}

pub fn descending<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| compare(b, a));
    sorted
}

pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    items.iter().rev().cloned().collect()
}

/// Sorted ascending, then drained from both ends: `[1,2,3,4,5] -> [1,5,2,4,3]`.
///
/// On odd lengths the last remaining element is taken from the low end only.
pub fn side_cross<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut remaining: VecDeque<T> = ascending(items).into();
    let mut out = Vec::with_capacity(remaining.len());
    while let Some(low) = remaining.pop_front() {
        out.push(low);
        if let Some(high) = remaining.pop_back() {
            out.push(high);
        }
    }
    out
}

/// Canonical order walked outward from index `len / 2`:
/// `[a,b,c,d,e] -> [c,b,d,a,e]`, `[a,b,c,d] -> [c,b,d,a]`.
///
/// Each side stops on its own bound while the other keeps going.
pub fn middle_out<T: Clone>(items: &[T]) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }

    let middle = items.len() / 2;
    let (before, from_middle) = items.split_at(middle);
    let mut out = Vec::with_capacity(items.len());
    out.push(from_middle[0].clone());

    let mut left = before.iter().rev();
    let mut right = from_middle[1..].iter();
    loop {
        let (l, r) = (left.next(), right.next());
        if l.is_none() && r.is_none() {
            break;
        }
        out.extend(l.cloned());
        out.extend(r.cloned());
    }
    out
}
