//! `RocksDB` storage implementation.
//!
//! This module provides the `RocksStore` implementation of the `Store` trait.

use std::path::Path;
use std::sync::Arc;

use cafe_api_core::CafeId;
use parking_lot::Mutex;
use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::types::{Cafe, NewCafe};
use crate::Store;

/// RocksDB-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
    /// Serializes read-check-write sequences (name uniqueness, ID allocation).
    write_lock: Mutex<()>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Mutex::new(()),
        })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Read the next ID to allocate without consuming it.
    fn peek_next_id(&self) -> Result<CafeId> {
        let cf_meta = self.cf(cf::META)?;

        match self
            .db
            .get_cf(&cf_meta, keys::NEXT_CAFE_ID)
            .map_err(|e| StoreError::Database(e.to_string()))?
        {
            Some(data) => {
                CafeId::from_be_slice(&data).map_err(|e| StoreError::Serialization(e.to_string()))
            }
            None => Ok(CafeId::FIRST),
        }
    }

    /// Write a full cafe record, leaving the name index untouched.
    fn put_cafe(&self, cafe: &Cafe) -> Result<()> {
        let cf_cafes = self.cf(cf::CAFES)?;
        let value = Self::serialize(cafe)?;

        self.db
            .put_cf(&cf_cafes, keys::cafe_key(cafe.id), value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}

impl Store for RocksStore {
    fn get_cafe(&self, cafe_id: CafeId) -> Result<Option<Cafe>> {
        let cf = self.cf(cf::CAFES)?;

        self.db
            .get_cf(&cf, keys::cafe_key(cafe_id))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    fn list_cafes(&self) -> Result<Vec<Cafe>> {
        let cf_by_name = self.cf(cf::CAFES_BY_NAME)?;

        let mut cafes = Vec::new();
        let iter = self.db.iterator_cf(&cf_by_name, IteratorMode::Start);

        for item in iter {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            let cafe_id = CafeId::from_be_slice(&value)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;

            // A concurrent delete may remove the row between index and lookup.
            if let Some(cafe) = self.get_cafe(cafe_id)? {
                cafes.push(cafe);
            }
        }

        Ok(cafes)
    }

    fn count_cafes(&self) -> Result<u64> {
        let cf = self.cf(cf::CAFES)?;

        let mut count = 0u64;
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            item.map_err(|e| StoreError::Database(e.to_string()))?;
            count += 1;
        }

        Ok(count)
    }

    fn insert_cafe(&self, new_cafe: NewCafe) -> Result<Cafe> {
        let cf_cafes = self.cf(cf::CAFES)?;
        let cf_by_name = self.cf(cf::CAFES_BY_NAME)?;
        let cf_meta = self.cf(cf::META)?;

        let _guard = self.write_lock.lock();

        let cafe_id = self.peek_next_id()?;
        let cafe = new_cafe.into_cafe(cafe_id)?;

        let taken = self
            .db
            .get_cf(&cf_by_name, keys::name_key(&cafe.name))
            .map_err(|e| StoreError::Database(e.to_string()))?
            .is_some();
        if taken {
            return Err(StoreError::DuplicateName(cafe.name));
        }

        let following = cafe_id
            .next()
            .map_err(|e| StoreError::Database(e.to_string()))?;
        let value = Self::serialize(&cafe)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_cafes, keys::cafe_key(cafe_id), &value);
        batch.put_cf(&cf_by_name, keys::name_key(&cafe.name), keys::cafe_key(cafe_id));
        batch.put_cf(&cf_meta, keys::NEXT_CAFE_ID, keys::cafe_key(following));

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(cafe_id = %cafe.id, name = %cafe.name, "Inserted cafe");

        Ok(cafe)
    }

    fn update_cafe_price(&self, cafe_id: CafeId, coffee_price: Option<String>) -> Result<Cafe> {
        let _guard = self.write_lock.lock();

        let mut cafe = self.get_cafe(cafe_id)?.ok_or(StoreError::NotFound)?;
        cafe.coffee_price = coffee_price;
        self.put_cafe(&cafe)?;

        tracing::debug!(cafe_id = %cafe_id, coffee_price = ?cafe.coffee_price, "Updated cafe price");

        Ok(cafe)
    }

    fn delete_cafe(&self, cafe_id: CafeId) -> Result<()> {
        let cf_cafes = self.cf(cf::CAFES)?;
        let cf_by_name = self.cf(cf::CAFES_BY_NAME)?;

        let _guard = self.write_lock.lock();

        // Get the cafe to find its name index entry
        let cafe = self.get_cafe(cafe_id)?.ok_or(StoreError::NotFound)?;

        let mut batch = WriteBatch::default();
        batch.delete_cf(&cf_cafes, keys::cafe_key(cafe_id));
        batch.delete_cf(&cf_by_name, keys::name_key(&cafe.name));

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(cafe_id = %cafe_id, name = %cafe.name, "Deleted cafe");

        Ok(())
    }
}
