//! `RocksDB` storage layer for the cafe API.
//!
//! This crate provides persistent storage for cafe records using `RocksDB`
//! with column families standing in for a single relational table.
//!
//! # Architecture
//!
//! The storage uses the following column families:
//!
//! - `cafes`: Primary cafe records, keyed by `cafe_id`
//! - `cafes_by_name`: Unique name index; iteration order is name order
//! - `meta`: The persisted ID sequence
//!
//! # Example
//!
//! ```no_run
//! use cafe_api_store::{RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/cafes.db").unwrap();
//!
//! // List cafes ordered by name
//! let cafes = store.list_cafes().unwrap();
//! # let _ = cafes;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;
pub mod types;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;
pub use types::{Cafe, NewCafe};

use cafe_api_core::CafeId;

/// The storage trait defining all database operations.
///
/// This trait abstracts the storage layer, allowing for different implementations
/// (e.g., `RocksDB`, in-memory for testing). Every mutation commits before
/// returning.
pub trait Store: Send + Sync {
    /// Get a cafe by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_cafe(&self, cafe_id: CafeId) -> Result<Option<Cafe>>;

    /// List every cafe, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_cafes(&self) -> Result<Vec<Cafe>>;

    /// Count the stored cafes.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn count_cafes(&self) -> Result<u64>;

    /// Insert a new cafe, allocating its ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingField` if a required column is unset and
    /// `StoreError::DuplicateName` if the name is already taken.
    fn insert_cafe(&self, cafe: NewCafe) -> Result<Cafe>;

    /// Set or clear a cafe's coffee price.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the cafe doesn't exist.
    fn update_cafe_price(&self, cafe_id: CafeId, coffee_price: Option<String>) -> Result<Cafe>;

    /// Delete a cafe by ID.
    ///
    /// This also removes the cafe from the name index.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the cafe doesn't exist.
    fn delete_cafe(&self, cafe_id: CafeId) -> Result<()>;
}
