use super::dto::{FormKind, VerifiedLocation};
use super::session::LocationSession;
use crate::application::resolve_pincodes::PostalCodeResolver;
use crate::application::reverse_geocode::{DetectedLocation, ReverseGeocodeResolver};
use crate::config::Config;
use crate::domain::catalog::canonical_state;
use crate::domain::location::{
    alias::remap_split_territory,
    errors::{LocationError, ReverseGeocodeError},
    value_objects::{Pincode, PostalCandidate},
};
use crate::infrastructure::{
    backend::{GeoBackend, GeoBackendClient},
    http::{build_http_client, parse_base_url},
    postal::{IndiaPostClient, PostalDirectory},
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

struct EngineInner {
    directory: Arc<dyn PostalDirectory>,
    resolver: PostalCodeResolver,
    reverse: ReverseGeocodeResolver,
}

/// Shared entry point for every form. Holds the collaborators only; all
/// per-form state lives in the [`LocationSession`]s it opens.
#[derive(Clone)]
pub struct LocationEngine {
    inner: Arc<EngineInner>,
}

impl LocationEngine {
    pub fn new(directory: Arc<dyn PostalDirectory>, backend: Option<Arc<dyn GeoBackend>>) -> Self {
        Self {
            inner: Arc::new(EngineInner {
                resolver: PostalCodeResolver::new(directory.clone(), backend.clone()),
                reverse: ReverseGeocodeResolver::new(backend),
                directory,
            }),
        }
    }

    /// Wires the India Post client and, when `BACKEND_BASE_URL` is set, the
    /// owning backend's geo client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = build_http_client(config.external_timeout(), &config.user_agent())?;
        let directory: Arc<dyn PostalDirectory> = Arc::new(IndiaPostClient::new(
            client.clone(),
            parse_base_url(&config.india_post_base_url)?,
        ));
        let backend = match &config.backend_base_url {
            Some(url) => Some(Arc::new(GeoBackendClient::new(client, parse_base_url(url)?))
                as Arc<dyn GeoBackend>),
            None => None,
        };
        Ok(Self::new(directory, backend))
    }

    pub fn open_session(&self, kind: FormKind) -> LocationSession {
        LocationSession::new(self.clone(), kind)
    }

    pub async fn resolve_pincodes(&self, state: &str, district: &str) -> Vec<PostalCandidate> {
        self.inner.resolver.resolve(state, district).await
    }

    /// Looks `pincode` up in the single-pincode directory.
    ///
    /// The first office decides: state from `State` or `Circle`, district
    /// from the first non-blank of `District`, `Division`, `Region`, `Block`.
    /// Leh and Kargil reported under Jammu and Kashmir move to Ladakh. The
    /// state must exist in the catalog.
    #[instrument(skip(self), fields(pincode = %pincode))]
    pub async fn verify_pincode(&self, pincode: &Pincode) -> Result<VerifiedLocation, LocationError> {
        let offices = self.inner.directory.lookup_pincode(pincode.as_str()).await?;
        let office = offices
            .first()
            .ok_or_else(|| LocationError::NotFound(format!("pincode {} is not registered", pincode)))?;

        let reported_state = office.reported_state();
        let district = office.pincode_district();
        if reported_state.is_empty() || district.is_empty() {
            debug!(reported_state, district, "incomplete post office row");
            return Err(LocationError::NotFound(format!(
                "pincode {} has no state or district",
                pincode
            )));
        }

        let state = remap_split_territory(reported_state, district)
            .or_else(|| canonical_state(reported_state))
            .ok_or_else(|| {
                LocationError::NotFound(format!("state {:?} is not in the catalog", reported_state))
            })?;

        info!(state, district, "Pincode verified");
        Ok(VerifiedLocation {
            pincode: pincode.to_string(),
            state: state.to_string(),
            district: district.to_string(),
        })
    }

    pub async fn detect_location(&self, lat: f64, lon: f64) -> Result<DetectedLocation, ReverseGeocodeError> {
        self.inner.reverse.execute(lat, lon).await
    }
}
