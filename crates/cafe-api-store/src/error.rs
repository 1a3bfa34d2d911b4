//! Error types for the storage layer.

use cafe_api_core::CafeField;
use thiserror::Error;

/// A result type using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested record was not found.
    #[error("record not found")]
    NotFound,

    /// Another cafe already uses this name.
    #[error("unique constraint failed: cafes.name = {0:?}")]
    DuplicateName(String),

    /// A `NOT NULL` column was left unset on insert.
    #[error("not null constraint failed: cafes.{0}")]
    MissingField(CafeField),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}
