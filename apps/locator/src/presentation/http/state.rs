use crate::{
    application::{lookup_pincode::LookupPincodeUseCase, resolve_pincodes::PostalCodeResolver},
    config::Config,
    infrastructure::{
        cache::RedisCache,
        geocoding::{NominatimGeocoder, ReverseGeocoder},
        http::{build_http_client, parse_base_url},
        postal::{IndiaPostClient, PostalDirectory},
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when `REDIS_URL` is unset; handlers then fetch directly.
    pub cache: Option<Arc<RedisCache>>,
    pub resolver: Arc<PostalCodeResolver>,
    pub pincode_lookup: Arc<LookupPincodeUseCase>,
    pub geocoder: Arc<dyn ReverseGeocoder>,
}

impl AppState {
    pub fn new(
        config: Config,
        cache: Option<Arc<RedisCache>>,
        directory: Arc<dyn PostalDirectory>,
        geocoder: Arc<dyn ReverseGeocoder>,
    ) -> Self {
        Self {
            config,
            cache,
            resolver: Arc::new(PostalCodeResolver::without_backend(directory.clone())),
            pincode_lookup: Arc::new(LookupPincodeUseCase::new(directory)),
            geocoder,
        }
    }

    /// Builds the production collaborators from `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let client = build_http_client(config.external_timeout(), &config.user_agent())?;
        let directory = Arc::new(IndiaPostClient::new(
            client.clone(),
            parse_base_url(&config.india_post_base_url)?,
        ));
        let geocoder = Arc::new(NominatimGeocoder::new(
            client,
            parse_base_url(&config.nominatim_base_url)?,
        ));
        let cache = match &config.redis_url {
            Some(url) => Some(Arc::new(RedisCache::open(url, "locator")?)),
            None => None,
        };
        Ok(Self::new(config, cache, directory, geocoder))
    }
}
