use super::traits::{PostOffice, PostalDirectory};
use crate::domain::location::errors::LocationError;
use crate::infrastructure::http::{transport_error, with_segments};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

const SERVICE: &str = "india-post";

/// One envelope of the India Post response. The API always answers with a
/// one-element array; a miss is `Status: "Error"` with `PostOffice: null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PostalEnvelope {
    status: Option<String>,
    #[serde(default)]
    post_office: Option<Vec<PostOffice>>,
}

fn offices_from(envelopes: Vec<PostalEnvelope>) -> Vec<PostOffice> {
    envelopes
        .into_iter()
        .next()
        .filter(|envelope| {
            envelope
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("success"))
        })
        .and_then(|envelope| envelope.post_office)
        .unwrap_or_default()
}

pub struct IndiaPostClient {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl IndiaPostClient {
    pub fn new(client: reqwest::Client, base_url: reqwest::Url) -> Self {
        Self { client, base_url }
    }

    async fn fetch(&self, segments: &[&str]) -> Result<Vec<PostOffice>, LocationError> {
        let url = with_segments(&self.base_url, segments)?;
        debug!(%url, "India Post request");

        let envelopes: Vec<PostalEnvelope> = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| transport_error(SERVICE, e))?
            .json()
            .await
            .map_err(|e| transport_error(SERVICE, e))?;

        Ok(offices_from(envelopes))
    }
}

#[async_trait]
impl PostalDirectory for IndiaPostClient {
    async fn search_locality(&self, query: &str) -> Result<Vec<PostOffice>, LocationError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.fetch(&["postoffice", query]).await
    }

    async fn lookup_pincode(&self, pincode: &str) -> Result<Vec<PostOffice>, LocationError> {
        self.fetch(&["pincode", pincode.trim()]).await
    }
}
