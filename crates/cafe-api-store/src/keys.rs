//! Key encoding utilities for `RocksDB`.
//!
//! IDs are stored big-endian so that the primary family iterates in ID
//! order; names are stored as raw UTF-8 so that the name index iterates in
//! byte-wise lexicographic order.

use cafe_api_core::CafeId;

/// Key in the meta family holding the next ID to allocate.
pub const NEXT_CAFE_ID: &[u8] = b"next_cafe_id";

/// Encode a cafe key (the big-endian ID bytes).
#[must_use]
pub fn cafe_key(cafe_id: CafeId) -> [u8; 8] {
    cafe_id.to_be_bytes()
}

/// Encode a name index key (the UTF-8 name bytes).
#[must_use]
pub fn name_key(name: &str) -> &[u8] {
    name.as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cafe_keys_sort_by_id() {
        let low = cafe_key(CafeId::new(9).unwrap());
        let high = cafe_key(CafeId::new(300).unwrap());
        assert!(low < high);
    }

    #[test]
    fn name_keys_sort_lexicographically() {
        assert!(name_key("Bean There") < name_key("Brew Haus"));
        assert!(name_key("Zebra") < name_key("apple"));
    }
}
