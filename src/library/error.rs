//! Error types for cursor traversal.

use thiserror::Error;

/// Errors that can occur while advancing a [`Cursor`](crate::library::Cursor).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CursorError {
    /// `take_next` was called after `has_more` turned false.
    #[error("Cursor exhausted: position {position} of {len}")]
    Exhausted { position: usize, len: usize },
}
