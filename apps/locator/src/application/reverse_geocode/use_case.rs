use super::dto::DetectedLocation;
use crate::domain::catalog::canonical_state;
use crate::domain::location::{
    alias::remap_split_territory,
    errors::ReverseGeocodeError,
    value_objects::{Coordinates, is_pincode},
};
use crate::infrastructure::backend::GeoBackend;
use std::sync::Arc;
use tracing::{debug, instrument};

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Turns coordinates into a (state, district, pincode) tuple through the
/// owning backend's reverse endpoint.
#[derive(Clone)]
pub struct ReverseGeocodeResolver {
    backend: Option<Arc<dyn GeoBackend>>,
}

impl ReverseGeocodeResolver {
    pub fn new(backend: Option<Arc<dyn GeoBackend>>) -> Self {
        Self { backend }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, lat: f64, lon: f64) -> Result<DetectedLocation, ReverseGeocodeError> {
        let coordinates = Coordinates::new(lat, lon)?;
        let backend = self
            .backend
            .as_ref()
            .ok_or_else(|| ReverseGeocodeError::Transport("no geo backend configured".into()))?;

        let place = backend.reverse(coordinates).await?;

        let pincode: String = place
            .pincode
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if !is_pincode(&pincode) {
            debug!(pincode = %pincode, "reverse lookup returned no usable pincode");
            return Err(ReverseGeocodeError::MissingPincode);
        }

        let district = trimmed(place.district);
        let state = trimmed(place.state).map(|raw| {
            let remapped = district
                .as_deref()
                .and_then(|d| remap_split_territory(&raw, d));
            match remapped.or_else(|| canonical_state(&raw)) {
                Some(canonical) => canonical.to_string(),
                None => raw,
            }
        });

        Ok(DetectedLocation {
            pincode,
            state,
            district,
        })
    }
}
