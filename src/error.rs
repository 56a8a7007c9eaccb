//! Errors surfaced by [`Tree`][crate::Tree] lookups and removals.

use thiserror::Error;

/// The ways an operation on a [`Tree`][crate::Tree] can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The search ran off the bottom of the tree without meeting the key.
    #[error("key not found")]
    KeyNotFound,
}

/// Shorthand for results whose error is this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
