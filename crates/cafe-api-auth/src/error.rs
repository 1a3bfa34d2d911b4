//! Authentication error types.

use thiserror::Error;

/// A result type using `AuthError`.
pub type Result<T> = std::result::Result<T, AuthError>;

/// Errors that can occur while checking an API key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request carried no API key.
    #[error("missing API key")]
    MissingKey,

    /// The request carried an API key that does not match the secret.
    #[error("incorrect API key")]
    IncorrectKey,

    /// The guard was configured with an empty secret.
    #[error("shared secret must not be empty")]
    EmptySecret,
}
