//! Cafe directory service for the cafe API.
//!
//! This crate provides the business logic behind the HTTP handlers. It turns
//! query parameters into store operations and keeps every failure cause
//! explicit in [`ControlError`], leaving the HTTP layer to decide how much of
//! that distinction callers get to see.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Gateway (HTTP)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   CafeDirectoryService                      │
//! │  ┌─────────────────────┐ ┌─────────────────────────────┐   │
//! │  │   Reads (random,    │ │   Writes (add, reprice,     │   │
//! │  │   all, search)      │ │   remove)                   │   │
//! │  └─────────────────────┘ └─────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       ┌──────────────┐
//!                       │    Store     │
//!                       │  (RocksDB)   │
//!                       └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use cafe_api_control::{CafeDirectory, CafeDirectoryService};
//! use cafe_api_store::RocksStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Arc::new(RocksStore::open("/tmp/cafes.db")?);
//! let directory = CafeDirectoryService::new(store);
//!
//! let params = vec![("name".to_string(), "Bean There".to_string())];
//! match directory.add_cafe(&params).await {
//!     Ok(cafe) => println!("Added cafe {}", cafe.id),
//!     Err(err) => println!("Rejected: {err}"),
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod draft;
pub mod error;
pub mod service;

pub use draft::{draft_from_params, ParamValue};
pub use error::{ControlError, Result};
pub use service::{CafeDirectory, CafeDirectoryService};

// Re-export commonly used types from dependencies for convenience
pub use cafe_api_core::{CafeField, CafeId};
pub use cafe_api_store::{Cafe, NewCafe};
