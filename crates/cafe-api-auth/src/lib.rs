//! Shared-secret access guard for the cafe API.
//!
//! Destructive endpoints are gated by a single API key that callers pass as a
//! query parameter. The secret is supplied by configuration when the guard is
//! constructed; there is no per-caller identity, rotation, or rate limiting.
//!
//! # Example
//!
//! ```
//! use cafe_api_auth::{AccessGuard, SharedSecretGuard};
//!
//! let guard = SharedSecretGuard::new("TopSecretAPIKey").unwrap();
//!
//! assert!(guard.check(Some("TopSecretAPIKey")));
//! assert!(!guard.check(Some("topsecretapikey")));
//! assert!(!guard.check(None));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod guard;

pub use error::{AuthError, Result};
pub use guard::{key_fingerprint, AccessGuard, SharedSecretGuard};
