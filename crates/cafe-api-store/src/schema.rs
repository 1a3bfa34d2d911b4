//! Database schema definitions and column families.
//!
//! This module defines the column families used in `RocksDB` storage.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// Primary cafe records, keyed by big-endian `cafe_id`.
    pub const CAFES: &str = "cafes";

    /// Unique index: cafe ID by name, keyed by the UTF-8 name.
    ///
    /// Iterating this family yields cafes in name order.
    pub const CAFES_BY_NAME: &str = "cafes_by_name";

    /// Bookkeeping values such as the ID sequence.
    pub const META: &str = "meta";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![cf::CAFES, cf::CAFES_BY_NAME, cf::META]
}
