use crate::domain::location::errors::LocationError;
use crate::domain::location::value_objects::Coordinates;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BackendPincode {
    pub pincode: String,
    #[serde(default)]
    pub post_office_name: Option<String>,
}

/// Body of `GET /api/geo/pincodes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PincodeList {
    #[serde(default)]
    pub pincodes: Vec<BackendPincode>,
}

/// Body of `GET /api/geo/reverse`. The provider may omit any field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReversePlace {
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
}

/// The owning application's geo service.
#[async_trait]
pub trait GeoBackend: Send + Sync {
    async fn pincodes_for(&self, state: &str, district: &str) -> Result<PincodeList, LocationError>;

    async fn reverse(&self, coordinates: Coordinates) -> Result<ReversePlace, LocationError>;
}
