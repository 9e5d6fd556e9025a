//! Error types for the collection and its cursors.

use thiserror::Error;

/// Errors raised by collection mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// `remove` found zero occurrences of the requested element.
    #[error("Element not found in container")]
    ElementNotFound,
}

/// Errors raised when a cursor is dereferenced outside its snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    #[error("Index out of range: {index} (length: {length})")]
    OutOfRange { index: usize, length: usize },
}

/// Errors raised when parsing an ordering name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderParseError {
    #[error("Unknown traversal order: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, CollectionError>;
