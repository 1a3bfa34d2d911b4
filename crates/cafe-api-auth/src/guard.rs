//! API key verification.
//!
//! This module provides the [`AccessGuard`] trait and the
//! [`SharedSecretGuard`] implementation that compares keys against one
//! configured secret.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::error::{AuthError, Result};

/// Trait for authorizing destructive requests.
pub trait AccessGuard: Send + Sync {
    /// Verify a caller-provided key.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingKey` if no key was provided and
    /// `AuthError::IncorrectKey` if it does not match.
    fn verify(&self, provided: Option<&str>) -> Result<()>;

    /// Whether the provided key grants access.
    fn check(&self, provided: Option<&str>) -> bool {
        self.verify(provided).is_ok()
    }
}

/// Guard that accepts exactly one secret string.
///
/// Matching is exact: no trimming, no case folding.
#[derive(Clone)]
pub struct SharedSecretGuard {
    secret: String,
}

impl SharedSecretGuard {
    /// Create a guard for the given secret.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptySecret` if the secret is empty, since an empty
    /// secret would match an empty `api-key` parameter.
    pub fn new(secret: impl Into<String>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        Ok(Self { secret })
    }
}

impl fmt::Debug for SharedSecretGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSecretGuard")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AccessGuard for SharedSecretGuard {
    fn verify(&self, provided: Option<&str>) -> Result<()> {
        let provided = provided.ok_or_else(|| {
            tracing::debug!("Rejected request without API key");
            AuthError::MissingKey
        })?;

        if bool::from(provided.as_bytes().ct_eq(self.secret.as_bytes())) {
            Ok(())
        } else {
            tracing::warn!(
                key_fingerprint = %key_fingerprint(provided),
                "Rejected request with incorrect API key"
            );
            Err(AuthError::IncorrectKey)
        }
    }
}

/// Short, non-reversible fingerprint of a key, safe to write to logs.
#[must_use]
pub fn key_fingerprint(key: &str) -> String {
    let hash = blake3::hash(key.as_bytes());
    hex::encode(&hash.as_bytes()[..8])
}
