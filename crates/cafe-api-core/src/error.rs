//! Common error types for the cafe API.
//!
//! This module provides shared error types that are used across multiple crates.

use thiserror::Error;

/// A result type using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur throughout the cafe API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A query parameter does not name an assignable cafe field.
    #[error("unknown field: {0}")]
    UnknownField(String),
}
