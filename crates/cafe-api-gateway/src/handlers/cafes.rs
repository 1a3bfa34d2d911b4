//! Cafe endpoints.
//!
//! Read routes return bare cafe records and fail through [`ApiError`].
//! Mutating routes always answer with one of the fixed [`Envelope`]s; the
//! underlying cause is logged and then collapsed.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{Map, Value};

use cafe_api_auth::AccessGuard;
use cafe_api_control::{CafeDirectory, CafeId, ControlError};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::state::GatewayState;
use crate::wire::{cafe_to_map, cafes_by_id};

// =============================================================================
// Query Parameters
// =============================================================================

/// Raw query parameters in request order.
///
/// Decoded as pairs so a repeated key never turns into a rejection; callers
/// read it with [`first_param`].
type QueryPairs = Query<Vec<(String, String)>>;

/// Value of the first occurrence of `key`.
fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

// =============================================================================
// Read Handlers
// =============================================================================

/// Return one cafe chosen uniformly at random.
///
/// # Errors
///
/// Responds 500 when the directory is empty or the store fails.
pub async fn random_cafe<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
) -> Result<Json<Map<String, Value>>, ApiError>
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    let cafe = state.directory.random_cafe().await?;
    Ok(Json(cafe_to_map(&cafe)))
}

/// Return every cafe keyed by id.
///
/// # Errors
///
/// Responds 500 when the store fails.
pub async fn all_cafes<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
) -> Result<Json<Map<String, Value>>, ApiError>
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    let cafes = state.directory.all_cafes().await?;
    Ok(Json(cafes_by_id(&cafes)))
}

/// Return the cafes at exactly the requested location, keyed by id.
///
/// # Errors
///
/// Responds 500 when the store fails.
pub async fn search_cafes<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
    Query(params): QueryPairs,
) -> Result<Json<Map<String, Value>>, ApiError>
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    let cafes = state
        .directory
        .search_cafes(first_param(&params, "location"))
        .await?;
    Ok(Json(cafes_by_id(&cafes)))
}

// =============================================================================
// Mutating Handlers
// =============================================================================

/// Add a cafe from `field=value` query parameters.
pub async fn add_cafe<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
    Query(params): QueryPairs,
) -> Envelope
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    match state.directory.add_cafe(&params).await {
        Ok(cafe) => Envelope::added(&cafe.name),
        Err(ControlError::UnknownField(field)) => {
            tracing::debug!(field = %field, "Rejected add with unknown field");
            Envelope::unknown_field(&field)
        }
        Err(e) => {
            if e.is_client_error() {
                tracing::debug!(error = %e, "Rejected add");
            } else {
                tracing::error!(error = %e, "Add failed");
            }
            Envelope::add_failed()
        }
    }
}

/// Set or clear the coffee price of a cafe.
pub async fn update_price<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
    Path(cafe_id): Path<String>,
    Query(params): QueryPairs,
) -> Envelope
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    let Ok(cafe_id) = cafe_id.parse::<CafeId>() else {
        tracing::debug!(cafe_id = %cafe_id, "Unparsable cafe id");
        return Envelope::not_found();
    };
    let coffee_price = first_param(&params, "coffee_price").map(str::to_string);

    match state.directory.update_price(cafe_id, coffee_price).await {
        Ok(_) => Envelope::price_updated(),
        Err(e) => {
            log_lookup_failure(cafe_id, &e);
            Envelope::not_found()
        }
    }
}

/// Delete a cafe reported closed. Requires the shared secret.
///
/// The key is checked before the id is looked at, so a bad key answers the
/// same way for every id.
pub async fn report_closed<D, G>(
    State(state): State<Arc<GatewayState<D, G>>>,
    Path(cafe_id): Path<String>,
    Query(params): QueryPairs,
) -> Envelope
where
    D: CafeDirectory + 'static,
    G: AccessGuard + 'static,
{
    if !state.guard.check(first_param(&params, "api-key")) {
        return Envelope::incorrect_key();
    }

    let Ok(cafe_id) = cafe_id.parse::<CafeId>() else {
        tracing::debug!(cafe_id = %cafe_id, "Unparsable cafe id");
        return Envelope::not_found();
    };

    match state.directory.remove_cafe(cafe_id).await {
        Ok(()) => Envelope::deleted(),
        Err(e) => {
            log_lookup_failure(cafe_id, &e);
            Envelope::not_found()
        }
    }
}

fn log_lookup_failure(cafe_id: CafeId, err: &ControlError) {
    if err.is_client_error() {
        tracing::debug!(cafe_id = %cafe_id, error = %err, "Cafe not found");
    } else {
        tracing::error!(cafe_id = %cafe_id, error = %err, "Cafe operation failed");
    }
}
