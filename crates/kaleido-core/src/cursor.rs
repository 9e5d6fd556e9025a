//! Cursors over detached traversal snapshots.
//!
//! A traversal producer materializes one ordered `Vec<T>` and hands it to a
//! [`Span`]: a start cursor at position 0 and an end sentinel at position
//! `len`. Both cursors refer to the same snapshot until one of them is
//! written through, at which point the writer takes its own copy. A cursor
//! therefore always behaves as if it owned a private copy of the elements:
//!
//! - mutating the source collection never changes an existing snapshot;
//! - writing through [`Cursor::get_mut`] never reaches the source collection,
//!   nor any other cursor, including the one `post_advance` returned.
//!
//! Cursors compare equal iff their positions are equal. No ordering between
//! cursors is defined.

use crate::error::CursorError;
use std::fmt;
use std::sync::Arc;

/// A position within a traversal snapshot.
pub struct Cursor<T> {
    items: Arc<Vec<T>>,
    index: usize,
}

impl<T> Cursor<T> {
    fn at(items: Arc<Vec<T>>, index: usize) -> Self {
        Self { items, index }
    }

    /// Current position (0 for a start cursor, `len` for an end sentinel).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Length of the underlying snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when the cursor sits at or past the end of its snapshot.
    pub fn is_end(&self) -> bool {
        self.index >= self.items.len()
    }

    /// The whole snapshot this cursor walks, in traversal order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Current element, or `OutOfRange` at or past the end.
    pub fn try_get(&self) -> Result<&T, CursorError> {
        self.items.get(self.index).ok_or(CursorError::OutOfRange {
            index: self.index,
            length: self.items.len(),
        })
    }

    /// Current element.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past the end of its snapshot.
    pub fn get(&self) -> &T {
        match self.try_get() {
            Ok(item) => item,
            Err(err) => panic!("cursor dereference failed: {err}"),
        }
    }

    /// Pre-advance: move one position forward and return the moved cursor.
    ///
    /// Advancing an end cursor leaves it at the end.
    pub fn advance(&mut self) -> &mut Self {
        if self.index < self.items.len() {
            self.index += 1;
        }
        self
    }

    /// Post-advance: return the cursor as it was, then move forward.
    pub fn post_advance(&mut self) -> Self {
        let prior = self.clone();
        self.advance();
        prior
    }
}

impl<T: Clone> Cursor<T> {
    /// Mutable access to the current element of this cursor's private copy.
    pub fn try_get_mut(&mut self) -> Result<&mut T, CursorError> {
        let length = self.items.len();
        if self.index >= length {
            return Err(CursorError::OutOfRange {
                index: self.index,
                length,
            });
        }
        Ok(&mut Arc::make_mut(&mut self.items)[self.index])
    }

    /// Mutable access to the current element of this cursor's private copy.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at or past the end of its snapshot.
    pub fn get_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(item) => item,
            Err(err) => panic!("cursor dereference failed: {err}"),
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            index: self.index,
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.items.get(self.index))
            .field("len", &self.items.len())
            .finish()
    }
}

/// A start cursor and its end sentinel over one snapshot.
#[derive(Clone, Debug)]
pub struct Span<T> {
    pub start: Cursor<T>,
    pub end: Cursor<T>,
}

impl<T> Span<T> {
    pub fn new(items: Vec<T>) -> Self {
        let len = items.len();
        let items = Arc::new(items);
        Self {
            start: Cursor::at(Arc::clone(&items), 0),
            end: Cursor::at(items, len),
        }
    }

    pub fn into_parts(self) -> (Cursor<T>, Cursor<T>) {
        (self.start, self.end)
    }

    /// Elements remaining between `start` and `end`.
    pub fn len(&self) -> usize {
        self.end.index.saturating_sub(self.start.index)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrowing walk from `start` up to `end`.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        let items = self.start.as_slice();
        let stop = self.end.index.min(items.len());
        items[self.start.index.min(stop)..stop].iter()
    }
}

impl<T: Clone> Span<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> IntoIterator for Span<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let Span { start, end } = self;
        let stop = end.index.min(start.items.len());
        let begin = start.index.min(stop);
        // Release the sentinel's handle so an unshared snapshot moves out without copying.
        drop(end);

        let mut items = Arc::try_unwrap(start.items).unwrap_or_else(|shared| shared.as_ref().clone());
        items.truncate(stop);
        items.drain(..begin);
        items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Span<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
