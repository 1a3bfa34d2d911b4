//! The cafe schema's client-assignable columns.
//!
//! Query parameters are resolved against this allow-list instead of being
//! assigned by name at runtime. The primary key is not listed: it is
//! allocated by the store and never assignable.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A client-assignable column of the cafe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CafeField {
    /// Unique display name.
    Name,
    /// Link to the cafe on a map.
    MapUrl,
    /// Link to a photo of the cafe.
    ImgUrl,
    /// Neighbourhood or area.
    Location,
    /// Free-form seating capacity, e.g. `"20-30"`.
    Seats,
    /// Whether a toilet is available.
    HasToilet,
    /// Whether wifi is available.
    HasWifi,
    /// Whether power sockets are available.
    HasSockets,
    /// Whether phone calls are acceptable.
    CanTakeCalls,
    /// Free-form price of a coffee, e.g. `"£2.40"`.
    CoffeePrice,
}

impl CafeField {
    /// Every assignable field, in schema order.
    pub const ALL: [Self; 10] = [
        Self::Name,
        Self::MapUrl,
        Self::ImgUrl,
        Self::Location,
        Self::Seats,
        Self::HasToilet,
        Self::HasWifi,
        Self::HasSockets,
        Self::CanTakeCalls,
        Self::CoffeePrice,
    ];

    /// The column name as it appears in query strings and JSON bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MapUrl => "map_url",
            Self::ImgUrl => "img_url",
            Self::Location => "location",
            Self::Seats => "seats",
            Self::HasToilet => "has_toilet",
            Self::HasWifi => "has_wifi",
            Self::HasSockets => "has_sockets",
            Self::CanTakeCalls => "can_take_calls",
            Self::CoffeePrice => "coffee_price",
        }
    }

    /// Whether the column holds a boolean rather than text.
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(
            self,
            Self::HasToilet | Self::HasWifi | Self::HasSockets | Self::CanTakeCalls
        )
    }

    /// Whether the column is `NOT NULL`.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::CoffeePrice)
    }
}

impl FromStr for CafeField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for CafeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for field in CafeField::ALL {
            assert_eq!(field.as_str().parse::<CafeField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_names_rejected() {
        assert_eq!(
            "wifi".parse::<CafeField>(),
            Err(CoreError::UnknownField("wifi".to_string()))
        );
        // Matching is case-sensitive, like attribute names.
        assert!("Name".parse::<CafeField>().is_err());
    }

    #[test]
    fn primary_key_is_not_assignable() {
        assert!("id".parse::<CafeField>().is_err());
    }

    #[test]
    fn flags_and_requirements() {
        let flags: Vec<_> = CafeField::ALL.into_iter().filter(|f| f.is_flag()).collect();
        assert_eq!(flags.len(), 4);
        assert!(!CafeField::CoffeePrice.is_required());
        assert!(CafeField::Seats.is_required());
    }
}
