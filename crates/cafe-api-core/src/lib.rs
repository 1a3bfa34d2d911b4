//! Core types and utilities for the cafe API.
//!
//! This crate provides the foundational types shared by every other crate:
//!
//! - **Identifiers**: the strongly-typed [`CafeId`] primary key
//! - **Fields**: the [`CafeField`] allow-list naming every client-assignable column
//! - **Error types**: common error definitions shared across crates
//!
//! # Example
//!
//! ```
//! use cafe_api_core::{CafeField, CafeId};
//!
//! // Parse a cafe ID from a path segment
//! let cafe_id: CafeId = "42".parse().unwrap();
//! assert_eq!(cafe_id.get(), 42);
//!
//! // Resolve a query parameter against the schema
//! let field: CafeField = "has_wifi".parse().unwrap();
//! assert!(field.is_flag());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fields;
pub mod ids;

pub use error::{CoreError, Result};
pub use fields::CafeField;
pub use ids::{CafeId, IdError};
