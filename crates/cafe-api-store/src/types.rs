//! Domain types stored in the database.
//!
//! [`Cafe`] is the persisted row; [`NewCafe`] is the insert-time draft whose
//! columns may still be unset.

use cafe_api_core::{CafeField, CafeId};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// A cafe record stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cafe {
    /// Primary key, allocated on insert.
    pub id: CafeId,
    /// Unique display name.
    pub name: String,
    /// Link to the cafe on a map.
    pub map_url: String,
    /// Link to a photo of the cafe.
    pub img_url: String,
    /// Neighbourhood or area.
    pub location: String,
    /// Free-form seating capacity.
    pub seats: String,
    /// Whether a toilet is available.
    pub has_toilet: bool,
    /// Whether wifi is available.
    pub has_wifi: bool,
    /// Whether power sockets are available.
    pub has_sockets: bool,
    /// Whether phone calls are acceptable.
    pub can_take_calls: bool,
    /// Free-form price of a coffee.
    #[serde(default)]
    pub coffee_price: Option<String>,
}

/// A cafe that has not been inserted yet.
///
/// Every column starts unset. [`NewCafe::into_cafe`] enforces the `NOT NULL`
/// constraints when the store assigns an ID.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCafe {
    /// Unique display name.
    pub name: Option<String>,
    /// Link to the cafe on a map.
    pub map_url: Option<String>,
    /// Link to a photo of the cafe.
    pub img_url: Option<String>,
    /// Neighbourhood or area.
    pub location: Option<String>,
    /// Free-form seating capacity.
    pub seats: Option<String>,
    /// Whether a toilet is available.
    pub has_toilet: Option<bool>,
    /// Whether wifi is available.
    pub has_wifi: Option<bool>,
    /// Whether power sockets are available.
    pub has_sockets: Option<bool>,
    /// Whether phone calls are acceptable.
    pub can_take_calls: Option<bool>,
    /// Free-form price of a coffee.
    pub coffee_price: Option<String>,
}

impl NewCafe {
    /// Complete the draft into a row with the given primary key.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingField` naming the first required column
    /// that is still unset.
    pub fn into_cafe(self, id: CafeId) -> Result<Cafe> {
        fn required<T>(value: Option<T>, field: CafeField) -> Result<T> {
            value.ok_or(StoreError::MissingField(field))
        }

        Ok(Cafe {
            id,
            name: required(self.name, CafeField::Name)?,
            map_url: required(self.map_url, CafeField::MapUrl)?,
            img_url: required(self.img_url, CafeField::ImgUrl)?,
            location: required(self.location, CafeField::Location)?,
            seats: required(self.seats, CafeField::Seats)?,
            has_toilet: required(self.has_toilet, CafeField::HasToilet)?,
            has_wifi: required(self.has_wifi, CafeField::HasWifi)?,
            has_sockets: required(self.has_sockets, CafeField::HasSockets)?,
            can_take_calls: required(self.can_take_calls, CafeField::CanTakeCalls)?,
            coffee_price: self.coffee_price,
        })
    }
}

impl From<Cafe> for NewCafe {
    fn from(cafe: Cafe) -> Self {
        Self {
            name: Some(cafe.name),
            map_url: Some(cafe.map_url),
            img_url: Some(cafe.img_url),
            location: Some(cafe.location),
            seats: Some(cafe.seats),
            has_toilet: Some(cafe.has_toilet),
            has_wifi: Some(cafe.has_wifi),
            has_sockets: Some(cafe.has_sockets),
            can_take_calls: Some(cafe.can_take_calls),
            coffee_price: cafe.coffee_price,
        }
    }
}
