use super::traits::{GeoBackend, PincodeList, ReversePlace};
use crate::domain::location::errors::LocationError;
use crate::domain::location::value_objects::Coordinates;
use crate::infrastructure::http::{transport_error, with_segments};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

const SERVICE: &str = "geo-backend";

pub struct GeoBackendClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl GeoBackendClient {
    pub fn new(client: reqwest::Client, base_url: reqwest::Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, name: &str, params: &[(&str, String)]) -> Result<reqwest::Url, LocationError> {
        let mut url = with_segments(&self.base_url, &["api", "geo", name])?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: reqwest::Url) -> Result<T, LocationError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LocationError::NotFound("backend has no data".into()));
        }

        response
            .error_for_status()
            .map_err(|e| transport_error(SERVICE, e))?
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))
    }
}

#[async_trait]
impl GeoBackend for GeoBackendClient {
    async fn pincodes_for(&self, state: &str, district: &str) -> Result<PincodeList, LocationError> {
        let url = self.endpoint(
            "pincodes",
            &[
                ("district", district.trim().to_string()),
                ("state", state.trim().to_string()),
            ],
        )?;
        self.get_json(url).await
    }

    async fn reverse(&self, coordinates: Coordinates) -> Result<ReversePlace, LocationError> {
        let url = self.endpoint(
            "reverse",
            &[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
            ],
        )?;
        self.get_json(url).await
    }
}
