//! Insertion-ordered collection with multi-order traversal snapshots.
//!
//! The collection keeps one canonical sequence (insertion order, duplicates
//! allowed). Every traversal producer copies that sequence into a new
//! [`Span`] arranged by an [`Order`]; the canonical storage is never touched
//! by a traversal, and a span obtained earlier is unaffected by later
//! `add`/`remove` calls.

use crate::cursor::{Cursor, Span};
use crate::error::{CollectionError, Result};
use crate::order::Order;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiView<T> {
    elements: Vec<T>,
}

impl<T> MultiView<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Append to the end of canonical storage.
    pub fn add(&mut self, element: T) {
        self.elements.push(element);
    }

    /// Number of live elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Canonical order, borrowed.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: PartialEq> MultiView<T> {
    /// Remove every element equal to `element`, keeping survivors in order.
    ///
    /// Fails with [`CollectionError::ElementNotFound`] when nothing matched;
    /// the collection is left unchanged in that case.
    pub fn remove(&mut self, element: &T) -> Result<()> {
        let before = self.elements.len();
        self.elements.retain(|e| e != element);

        let removed = before - self.elements.len();
        if removed == 0 {
            tracing::debug!(len = before, "remove: no matching element");
            return Err(CollectionError::ElementNotFound);
        }

        tracing::debug!(removed, remaining = self.elements.len(), "remove: dropped matching elements");
        Ok(())
    }

    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Occurrences of `element` in the collection.
    pub fn count(&self, element: &T) -> usize {
        self.elements.iter().filter(|e| *e == element).count()
    }
}

impl<T: PartialOrd + Clone> MultiView<T> {
    /// A fresh owned copy of the elements in `order`.
    pub fn snapshot(&self, order: Order) -> Vec<T> {
        order.arrange(&self.elements)
    }

    /// Start/end cursors over a fresh snapshot in `order`.
    pub fn traverse(&self, order: Order) -> Span<T> {
        Span::new(self.snapshot(order))
    }

    pub fn insertion_order(&self) -> Span<T> {
        self.traverse(Order::Insertion)
    }

    pub fn ascending_order(&self) -> Span<T> {
        self.traverse(Order::Ascending)
    }

    pub fn descending_order(&self) -> Span<T> {
        self.traverse(Order::Descending)
    }

    pub fn side_cross_order(&self) -> Span<T> {
        self.traverse(Order::SideCross)
    }

    pub fn reverse_order(&self) -> Span<T> {
        self.traverse(Order::Reverse)
    }

    pub fn middle_out_order(&self) -> Span<T> {
        self.traverse(Order::MiddleOut)
    }

    /// Start cursor over an insertion-order snapshot.
    pub fn begin(&self) -> Cursor<T> {
        self.insertion_order().start
    }

    /// End sentinel for [`begin`](Self::begin).
    pub fn end(&self) -> Cursor<T> {
        self.insertion_order().end
    }
}

impl<T> Default for MultiView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for MultiView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", element)?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for MultiView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for MultiView<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a MultiView<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for MultiView<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
