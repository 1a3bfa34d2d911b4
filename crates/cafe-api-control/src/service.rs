//! Cafe directory service implementation.
//!
//! This module provides the `CafeDirectory` trait and `CafeDirectoryService`
//! implementation that the HTTP handlers call into.

use std::sync::Arc;

use async_trait::async_trait;
use cafe_api_core::CafeId;
use cafe_api_store::{Cafe, Store};
use rand::Rng;

use crate::draft::draft_from_params;
use crate::error::{ControlError, Result};

/// Trait defining the cafe directory operations.
///
/// Each operation performs at most one store mutation, or a full scan for
/// the read paths.
#[async_trait]
pub trait CafeDirectory: Send + Sync {
    /// Pick one cafe uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::EmptyDirectory` if there are no cafes.
    async fn random_cafe(&self) -> Result<Cafe>;

    /// List every cafe, ordered by name.
    async fn all_cafes(&self) -> Result<Vec<Cafe>>;

    /// List the cafes whose location equals `location` exactly.
    ///
    /// A missing location matches nothing.
    async fn search_cafes(&self, location: Option<&str>) -> Result<Vec<Cafe>>;

    /// Create a cafe from `(field, value)` query parameters.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::UnknownField`, `ControlError::InvalidFlag`,
    /// `ControlError::MissingField` or `ControlError::DuplicateName` when the
    /// parameters do not describe an insertable cafe.
    async fn add_cafe(&self, params: &[(String, String)]) -> Result<Cafe>;

    /// Set or clear a cafe's coffee price.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::CafeNotFound` if the cafe doesn't exist.
    async fn update_price(&self, cafe_id: CafeId, coffee_price: Option<String>) -> Result<Cafe>;

    /// Remove a cafe that has been reported closed.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::CafeNotFound` if the cafe doesn't exist.
    async fn remove_cafe(&self, cafe_id: CafeId) -> Result<()>;

    /// Number of cafes in the directory.
    async fn cafe_count(&self) -> Result<u64>;
}

/// The main cafe directory implementation.
pub struct CafeDirectoryService<S: Store> {
    store: Arc<S>,
}

impl<S: Store> CafeDirectoryService<S> {
    /// Create a new directory service over the given store.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Remove and return a uniformly chosen element.
fn pick_random(mut cafes: Vec<Cafe>) -> Option<Cafe> {
    if cafes.is_empty() {
        return None;
    }
    let index = rand::thread_rng().gen_range(0..cafes.len());
    Some(cafes.swap_remove(index))
}

#[async_trait]
impl<S: Store + 'static> CafeDirectory for CafeDirectoryService<S> {
    async fn random_cafe(&self) -> Result<Cafe> {
        let cafes = self.store.list_cafes()?;
        pick_random(cafes).ok_or(ControlError::EmptyDirectory)
    }

    async fn all_cafes(&self) -> Result<Vec<Cafe>> {
        Ok(self.store.list_cafes()?)
    }

    async fn search_cafes(&self, location: Option<&str>) -> Result<Vec<Cafe>> {
        let Some(location) = location else {
            return Ok(Vec::new());
        };

        let mut cafes = self.store.list_cafes()?;
        cafes.retain(|cafe| cafe.location == location);
        Ok(cafes)
    }

    async fn add_cafe(&self, params: &[(String, String)]) -> Result<Cafe> {
        let draft = draft_from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))?;
        let cafe = self.store.insert_cafe(draft)?;

        tracing::info!(cafe_id = %cafe.id, name = %cafe.name, "Added cafe");

        Ok(cafe)
    }

    async fn update_price(&self, cafe_id: CafeId, coffee_price: Option<String>) -> Result<Cafe> {
        let cafe = self
            .store
            .update_cafe_price(cafe_id, coffee_price)
            .map_err(|e| ControlError::for_cafe(cafe_id, e))?;

        tracing::info!(
            cafe_id = %cafe_id,
            coffee_price = ?cafe.coffee_price,
            "Updated coffee price"
        );

        Ok(cafe)
    }

    async fn remove_cafe(&self, cafe_id: CafeId) -> Result<()> {
        self.store
            .delete_cafe(cafe_id)
            .map_err(|e| ControlError::for_cafe(cafe_id, e))?;

        tracing::info!(cafe_id = %cafe_id, "Removed closed cafe");

        Ok(())
    }

    async fn cafe_count(&self) -> Result<u64> {
        Ok(self.store.count_cafes()?)
    }
}
