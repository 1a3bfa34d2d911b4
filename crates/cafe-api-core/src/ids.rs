//! Core identifier types for the cafe API.
//!
//! Cafe IDs are allocated by the store from a monotonically increasing
//! sequence and travel over the wire as plain integers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// A cafe primary key.
///
/// IDs start at 1 and are never reused, so zero is not a valid identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CafeId(NonZeroU64);

impl CafeId {
    /// The first ID handed out by an empty store.
    pub const FIRST: Self = Self(NonZeroU64::MIN);

    /// Create a `CafeId` from a raw integer.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Zero` if `value` is zero.
    pub fn new(value: u64) -> Result<Self, IdError> {
        NonZeroU64::new(value).map(Self).ok_or(IdError::Zero)
    }

    /// Return the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0.get()
    }

    /// Return the ID that follows this one in the allocation sequence.
    ///
    /// # Errors
    ///
    /// Returns `IdError::Exhausted` if the sequence would overflow.
    pub fn next(self) -> Result<Self, IdError> {
        self.0.checked_add(1).map(Self).ok_or(IdError::Exhausted)
    }

    /// Encode the ID as big-endian bytes so keys sort numerically.
    #[must_use]
    pub const fn to_be_bytes(self) -> [u8; 8] {
        self.0.get().to_be_bytes()
    }

    /// Decode an ID from its big-endian key encoding.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly 8 bytes or encodes zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| IdError::InvalidLength {
            expected: 8,
            got: bytes.len(),
        })?;
        Self::new(u64::from_be_bytes(arr))
    }
}

impl FromStr for CafeId {
    type Err = IdError;

    /// Parse a `CafeId` from a decimal path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u64>().map_err(|_| IdError::InvalidNumber)?;
        Self::new(value)
    }
}

impl fmt::Debug for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CafeId({})", self.0)
    }
}

impl fmt::Display for CafeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for CafeId {
    type Error = IdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CafeId> for u64 {
    fn from(id: CafeId) -> Self {
        id.get()
    }
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not a decimal integer.
    #[error("invalid number")]
    InvalidNumber,

    /// Zero is never allocated as an ID.
    #[error("cafe IDs start at 1")]
    Zero,

    /// The encoded key has an incorrect length.
    #[error("invalid length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// The expected number of bytes.
        expected: usize,
        /// The actual number of bytes.
        got: usize,
    },

    /// The ID sequence has no values left.
    #[error("cafe ID sequence exhausted")]
    Exhausted,
}
