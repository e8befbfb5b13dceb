use crate::domain::location::errors::{LocationError, ReverseGeocodeError};
use crate::domain::location::value_objects::Coordinates;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Administrative units enclosing a coordinate pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GeocodedAddress {
    pub pincode: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodedAddress, LocationError>;
}

/// Device position provider, the server-side stand-in for browser geolocation.
#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Fails with `PermissionDenied` or `PositionUnavailable`.
    async fn current_position(&self) -> Result<Coordinates, ReverseGeocodeError>;
}
