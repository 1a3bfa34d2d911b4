//! Building new cafes from query parameters.
//!
//! Each parameter name is resolved against [`CafeField`]; its value is read
//! as a boolean when it spells `true` or `false` in any letter case and as
//! raw text otherwise.

use std::collections::HashSet;

use cafe_api_core::CafeField;
use cafe_api_store::NewCafe;

use crate::error::{ControlError, Result};

/// A query parameter value after boolean detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamValue<'a> {
    /// The value spelled `true` or `false`.
    Flag(bool),
    /// Any other value, untouched.
    Text(&'a str),
}

impl<'a> ParamValue<'a> {
    /// Classify a raw parameter value.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        if raw.eq_ignore_ascii_case("false") {
            Self::Flag(false)
        } else if raw.eq_ignore_ascii_case("true") {
            Self::Flag(true)
        } else {
            Self::Text(raw)
        }
    }
}

/// Assign one parameter to the draft.
///
/// Text columns keep the raw parameter text, so `name=True` stores `"True"`.
fn assign(draft: &mut NewCafe, field: CafeField, raw: &str) -> Result<()> {
    let flag = || match ParamValue::parse(raw) {
        ParamValue::Flag(value) => Ok(Some(value)),
        ParamValue::Text(text) => Err(ControlError::InvalidFlag {
            field,
            value: text.to_string(),
        }),
    };
    let text = || Some(raw.to_string());

    match field {
        CafeField::Name => draft.name = text(),
        CafeField::MapUrl => draft.map_url = text(),
        CafeField::ImgUrl => draft.img_url = text(),
        CafeField::Location => draft.location = text(),
        CafeField::Seats => draft.seats = text(),
        CafeField::CoffeePrice => draft.coffee_price = text(),
        CafeField::HasToilet => draft.has_toilet = flag()?,
        CafeField::HasWifi => draft.has_wifi = flag()?,
        CafeField::HasSockets => draft.has_sockets = flag()?,
        CafeField::CanTakeCalls => draft.can_take_calls = flag()?,
    }
    Ok(())
}

/// Build a draft from query parameters in request order.
///
/// When a name repeats, its first value wins.
///
/// # Errors
///
/// Returns `ControlError::UnknownField` for a parameter that names no
/// assignable column, and `ControlError::InvalidFlag` for a boolean column
/// whose value is not `true`/`false`.
pub fn draft_from_params<'a, I>(params: I) -> Result<NewCafe>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut draft = NewCafe::default();
    let mut seen = HashSet::new();

    for (key, raw) in params {
        let field: CafeField = key
            .parse()
            .map_err(|_| ControlError::UnknownField(key.to_string()))?;

        if seen.insert(field) {
            assign(&mut draft, field, raw)?;
        }
    }

    Ok(draft)
}
