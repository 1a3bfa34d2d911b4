//! Error types for the cafe directory.
//!
//! Every failure keeps its cause here even where the HTTP layer later
//! collapses several of them into one response envelope.

use cafe_api_core::{CafeField, CafeId};
use cafe_api_store::StoreError;
use thiserror::Error;

/// A result type using `ControlError`.
pub type Result<T> = std::result::Result<T, ControlError>;

/// Errors that can occur in cafe directory operations.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The requested cafe was not found.
    #[error("cafe not found: {0}")]
    CafeNotFound(CafeId),

    /// A random pick was requested from an empty directory.
    #[error("no cafes in the directory")]
    EmptyDirectory,

    /// A query parameter does not name an assignable field.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A boolean field was given a value other than true/false.
    #[error("field {field} expects true or false, got {value:?}")]
    InvalidFlag {
        /// The boolean field being assigned.
        field: CafeField,
        /// The rejected raw value.
        value: String,
    },

    /// A required field was not supplied.
    #[error("missing required field: {0}")]
    MissingField(CafeField),

    /// Another cafe already uses this name.
    #[error("a cafe named {0:?} already exists")]
    DuplicateName(String),

    /// Storage layer error.
    #[error("storage error: {0}")]
    Store(StoreError),
}

impl ControlError {
    /// Map a store error raised while operating on a specific cafe.
    #[must_use]
    pub fn for_cafe(cafe_id: CafeId, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::CafeNotFound(cafe_id),
            other => Self::from(other),
        }
    }

    /// Returns true if the error was caused by the request rather than the
    /// service.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        !matches!(self, Self::Store(_) | Self::EmptyDirectory)
    }
}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateName(name) => Self::DuplicateName(name),
            StoreError::MissingField(field) => Self::MissingField(field),
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_keep_their_cause() {
        let err = ControlError::from(StoreError::DuplicateName("Grind".into()));
        assert!(matches!(err, ControlError::DuplicateName(name) if name == "Grind"));

        let err = ControlError::from(StoreError::MissingField(CafeField::Seats));
        assert!(matches!(err, ControlError::MissingField(CafeField::Seats)));

        let err = ControlError::from(StoreError::Database("io".into()));
        assert!(matches!(err, ControlError::Store(_)));
    }

    #[test]
    fn not_found_carries_the_id() {
        let id = CafeId::new(7).unwrap();
        let err = ControlError::for_cafe(id, StoreError::NotFound);
        assert!(matches!(err, ControlError::CafeNotFound(found) if found == id));
    }

    #[test]
    fn client_error_classification() {
        assert!(ControlError::UnknownField("x".into()).is_client_error());
        assert!(ControlError::CafeNotFound(CafeId::FIRST).is_client_error());
        assert!(!ControlError::EmptyDirectory.is_client_error());
        assert!(!ControlError::Store(StoreError::NotFound).is_client_error());
    }
}
