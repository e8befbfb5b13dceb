use crate::{
    application::{
        lookup_pincode::PincodeInfo,
        resolve_pincodes::{PincodeQuery, PincodeResolution},
        reverse_geocode::ReverseQuery,
    },
    domain::location::{
        errors::LocationError,
        value_objects::{Coordinates, Pincode},
    },
    infrastructure::{backend::PincodeList, cache::RedisCache, geocoding::GeocodedAddress},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Serialize, de::DeserializeOwned};
use std::future::Future;
use tracing::{debug, instrument};
use validator::Validate;

/// Runs `fetch` through the cache when one is configured. Errors are
/// never cached.
async fn through_cache<T, F, Fut>(
    cache: Option<&RedisCache>,
    kind: &str,
    id: &str,
    ttl: u64,
    fetch: F,
) -> Result<T, LocationError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, LocationError>>,
{
    match cache {
        Some(cache) => cache.get_or_fetch(&cache.key(kind, id), ttl, fetch).await,
        None => fetch().await,
    }
}

/// `GET /api/geo/pincodes?district=&state=`
///
/// An empty result answers with an empty list and is not cached.
#[instrument(skip(state))]
pub async fn get_pincodes(
    State(state): State<AppState>,
    Query(params): Query<PincodeQuery>,
) -> Result<Json<PincodeList>, AppError> {
    params.validate()?;

    let resolver = state.resolver.clone();
    let id = format!("{}|{}", params.state.trim(), params.district.trim());
    let result = through_cache(
        state.cache.as_deref(),
        "pincodes",
        &id,
        state.config.postal_cache_ttl_seconds,
        || async move {
            let resolution: PincodeResolution =
                resolver.execute(&params.state, &params.district).await;
            if resolution.candidates.is_empty() {
                return Err(LocationError::NotFound("no pincodes".into()));
            }
            debug!(tier = ?resolution.tier, count = resolution.candidates.len(), "pincodes resolved");
            Ok(resolution)
        },
    )
    .await;

    match result {
        Ok(resolution) => Ok(Json(resolution.into())),
        Err(LocationError::NotFound(_)) => Ok(Json(PincodeList::default())),
        Err(e) => Err(e.into()),
    }
}

/// `GET /api/geo/pincode/{code}`
#[instrument(skip(state))]
pub async fn get_pincode(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<PincodeInfo>, AppError> {
    let pincode = Pincode::parse(&code)?;

    let lookup = state.pincode_lookup.clone();
    let key = pincode.clone();
    let info = through_cache(
        state.cache.as_deref(),
        "pincode",
        key.as_str(),
        state.config.postal_cache_ttl_seconds,
        || async move { lookup.execute(&pincode).await },
    )
    .await?;

    Ok(Json(info))
}

/// `GET /api/geo/reverse?lat=&lon=`
#[instrument(skip(state))]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<ReverseQuery>,
) -> Result<Json<GeocodedAddress>, AppError> {
    let coordinates = Coordinates::new(params.lat, params.lon)?;

    let geocoder = state.geocoder.clone();
    let address = through_cache(
        state.cache.as_deref(),
        "reverse",
        &coordinates.cache_key(),
        state.config.reverse_cache_ttl_seconds,
        || async move { geocoder.reverse(coordinates).await },
    )
    .await?;

    Ok(Json(address))
}
