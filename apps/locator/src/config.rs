//! Application configuration loading from environment variables.
//!
//! Every variable is optional; the service runs against the public India
//! Post and Nominatim endpoints without any configuration.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,locator=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `REDIS_URL`: Redis connection URL; caching is disabled when unset
//! - `BACKEND_BASE_URL`: Owning application's geo service, consulted before India Post
//! - `INDIA_POST_BASE_URL`: Postal directory (default: "https://api.postalpincode.in")
//! - `NOMINATIM_BASE_URL`: Reverse geocoder (default: "https://nominatim.openstreetmap.org")
//! - `GEO_USER_AGENT`: User-Agent sent to external geo services
//! - `EXTERNAL_TIMEOUT_SECONDS`: Timeout for every outbound call (default: 5)
//! - `POSTAL_CACHE_TTL_SECONDS`: Pincode list and lookup cache TTL (default: 86400)
//! - `REVERSE_CACHE_TTL_SECONDS`: Reverse geocode cache TTL (default: 43200)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins; any origin when empty

use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_INDIA_POST_BASE_URL: &str = "https://api.postalpincode.in";
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub redis_url: Option<String>,

    /// Base URL of the owning application's `/api/geo/*` endpoints
    pub backend_base_url: Option<String>,

    pub india_post_base_url: String,

    pub nominatim_base_url: String,

    /// Nominatim's usage policy requires an identifying agent
    pub geo_user_agent: Option<String>,

    pub external_timeout_seconds: u64,

    pub postal_cache_ttl_seconds: u64,

    pub reverse_cache_ttl_seconds: u64,

    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            redis_url: None,
            backend_base_url: None,
            india_post_base_url: DEFAULT_INDIA_POST_BASE_URL.to_string(),
            nominatim_base_url: DEFAULT_NOMINATIM_BASE_URL.to_string(),
            geo_user_agent: None,
            external_timeout_seconds: 5,
            postal_cache_ttl_seconds: 86_400,
            reverse_cache_ttl_seconds: 43_200,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            redis_url: env_optional("REDIS_URL"),
            backend_base_url: env_optional("BACKEND_BASE_URL"),
            india_post_base_url: env_or("INDIA_POST_BASE_URL", defaults.india_post_base_url)?,
            nominatim_base_url: env_or("NOMINATIM_BASE_URL", defaults.nominatim_base_url)?,
            geo_user_agent: env_optional("GEO_USER_AGENT"),
            external_timeout_seconds: env_or(
                "EXTERNAL_TIMEOUT_SECONDS",
                defaults.external_timeout_seconds,
            )?,
            postal_cache_ttl_seconds: env_or(
                "POSTAL_CACHE_TTL_SECONDS",
                defaults.postal_cache_ttl_seconds,
            )?,
            reverse_cache_ttl_seconds: env_or(
                "REVERSE_CACHE_TTL_SECONDS",
                defaults.reverse_cache_ttl_seconds,
            )?,
            allowed_origins: env_optional("ALLOWED_ORIGINS")
                .map(|raw| parse_list(&raw))
                .unwrap_or_default(),
        })
    }

    pub fn external_timeout(&self) -> Duration {
        Duration::from_secs(self.external_timeout_seconds.max(1))
    }

    pub fn user_agent(&self) -> String {
        self.geo_user_agent
            .clone()
            .unwrap_or_else(|| format!("locator/{}", env!("CARGO_PKG_VERSION")))
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

/// Blank values count as unset.
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
