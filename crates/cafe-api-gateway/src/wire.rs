//! Wire representation of cafes.
//!
//! Records go out as flat JSON objects keyed by column name. Booleans stay
//! booleans and an unset coffee price is `null`.

use serde_json::{Map, Value};

use cafe_api_control::Cafe;

/// Convert a cafe into a field-name → value mapping.
#[must_use]
pub fn cafe_to_map(cafe: &Cafe) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::from(cafe.id.get()));
    map.insert("name".to_string(), Value::from(cafe.name.as_str()));
    map.insert("map_url".to_string(), Value::from(cafe.map_url.as_str()));
    map.insert("img_url".to_string(), Value::from(cafe.img_url.as_str()));
    map.insert("location".to_string(), Value::from(cafe.location.as_str()));
    map.insert("seats".to_string(), Value::from(cafe.seats.as_str()));
    map.insert("has_toilet".to_string(), Value::Bool(cafe.has_toilet));
    map.insert("has_wifi".to_string(), Value::Bool(cafe.has_wifi));
    map.insert("has_sockets".to_string(), Value::Bool(cafe.has_sockets));
    map.insert("can_take_calls".to_string(), Value::Bool(cafe.can_take_calls));
    map.insert(
        "coffee_price".to_string(),
        cafe.coffee_price.as_deref().map_or(Value::Null, Value::from),
    );
    map
}

/// Build the `{"<id>": record}` object returned by the listing routes.
#[must_use]
pub fn cafes_by_id<'a, I>(cafes: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Cafe>,
{
    cafes
        .into_iter()
        .map(|cafe| (cafe.id.to_string(), Value::Object(cafe_to_map(cafe))))
        .collect()
}
