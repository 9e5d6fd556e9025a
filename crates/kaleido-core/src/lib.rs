//! # kaleido-core
//!
//! An insertion-ordered collection that can be walked six different ways
//! without ever reordering its own storage.
//!
//! - [`collection`] - [`MultiView`], the canonical store and its traversal producers
//! - [`order`] - the six orderings as plain slice-to-`Vec` functions
//! - [`cursor`] - [`Cursor`] and [`Span`], the start/end pair over a snapshot
//! - [`error`] - error types
//!
//! ## Example
//!
//! ```rust
//! use kaleido_core::MultiView;
//!
//! let mut numbers = MultiView::new();
//! for n in [7, 15, 6, 1, 2] {
//!     numbers.add(n);
//! }
//!
//! let (mut it, end) = numbers.side_cross_order().into_parts();
//! let mut seen = Vec::new();
//! while it != end {
//!     seen.push(*it.get());
//!     it.advance();
//! }
//! assert_eq!(seen, vec![1, 15, 2, 7, 6]);
//! assert_eq!(numbers.to_string(), "[7, 15, 6, 1, 2]");
//! ```

pub mod collection;
pub mod cursor;
pub mod error;
pub mod order;

pub use collection::MultiView;
pub use cursor::{Cursor, Span};
pub use error::{CollectionError, CursorError, OrderParseError, Result};
pub use order::Order;
