use super::traits::{GeocodedAddress, ReverseGeocoder};
use crate::domain::location::errors::LocationError;
use crate::domain::location::value_objects::Coordinates;
use crate::infrastructure::http::{transport_error, with_segments};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

const SERVICE: &str = "nominatim";

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    postcode: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    suburb: Option<String>,
    district: Option<String>,
    county: Option<String>,
    state_district: Option<String>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimReverse {
    address: Option<NominatimAddress>,
}

fn first_non_blank(values: impl IntoIterator<Item = Option<String>>) -> Option<String> {
    values
        .into_iter()
        .flatten()
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

impl From<NominatimAddress> for GeocodedAddress {
    fn from(address: NominatimAddress) -> Self {
        Self {
            pincode: first_non_blank([address.postcode]),
            city: first_non_blank([address.city, address.town, address.village, address.suburb]),
            district: first_non_blank([address.district, address.county, address.state_district]),
            state: first_non_blank([address.state]),
        }
    }
}

/// Reverse geocoding against an OpenStreetMap Nominatim instance.
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl NominatimGeocoder {
    /// `client` must carry an identifying User-Agent; the public instance
    /// rejects anonymous traffic.
    pub fn new(client: reqwest::Client, base_url: reqwest::Url) -> Self {
        Self { client, base_url }
    }

    fn reverse_url(&self, coordinates: Coordinates) -> Result<reqwest::Url, LocationError> {
        let mut url = with_segments(&self.base_url, &["reverse"])?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("addressdetails", "1")
            .append_pair("lat", &coordinates.lat.to_string())
            .append_pair("lon", &coordinates.lon.to_string());
        Ok(url)
    }
}

#[async_trait]
impl ReverseGeocoder for NominatimGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<GeocodedAddress, LocationError> {
        let url = self.reverse_url(coordinates)?;

        let body: NominatimReverse = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| transport_error(SERVICE, e))?
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        let address: GeocodedAddress = body
            .address
            .ok_or_else(|| LocationError::NotFound(format!("no address at {}", coordinates.cache_key())))?
            .into();

        info!(
            at = %coordinates.cache_key(),
            pincode = ?address.pincode,
            district = ?address.district,
            state = ?address.state,
            "Reverse geocoded"
        );
        Ok(address)
    }
}
