use crate::domain::location::errors::LocationError;
use std::time::Duration;

/// Builds the client shared by every outbound geo call. The timeout bounds
/// the whole request, and hitting it is reported as a transport failure.
pub fn build_http_client(timeout: Duration, user_agent: &str) -> anyhow::Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?)
}

pub fn parse_base_url(raw: &str) -> anyhow::Result<reqwest::Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    reqwest::Url::parse(trimmed).map_err(|e| anyhow::anyhow!("Invalid base url {}: {}", raw, e))
}

/// Appends path segments to `base`, percent-encoding each one.
pub fn with_segments(base: &reqwest::Url, segments: &[&str]) -> Result<reqwest::Url, LocationError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| LocationError::Transport(format!("{} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub fn transport_error(service: &str, err: reqwest::Error) -> LocationError {
    if err.is_timeout() {
        tracing::warn!(service, reqwest_timeout = %err);
        LocationError::Transport(format!("{} timed out", service))
    } else if err.is_connect() {
        tracing::warn!(service, reqwest_connect = %err);
        LocationError::Transport(format!("{} unreachable", service))
    } else if err.is_decode() {
        tracing::warn!(service, reqwest_decode = %err);
        LocationError::Transport(format!("{} returned a malformed body", service))
    } else if err.is_status() {
        tracing::info!(service, reqwest_status = %err);
        LocationError::Transport(format!("{} answered with an error status", service))
    } else {
        tracing::warn!(service, reqwest_error = %err);
        LocationError::Transport(format!("{} request failed", service))
    }
}
