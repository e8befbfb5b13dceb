use crate::domain::location::errors::LocationError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One post office row as returned by the India Post API.
///
/// The provider fills different fields depending on the office, so every
/// field is optional and blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PostOffice {
    pub name: Option<String>,
    pub pincode: Option<String>,
    pub state: Option<String>,
    pub circle: Option<String>,
    pub district: Option<String>,
    pub division: Option<String>,
    pub region: Option<String>,
    pub block: Option<String>,
}

fn first_present<'a>(fields: &[&'a Option<String>]) -> &'a str {
    fields
        .iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .unwrap_or("")
}

impl PostOffice {
    /// `State`, falling back to the postal `Circle`.
    pub fn reported_state(&self) -> &str {
        first_present(&[&self.state, &self.circle])
    }

    /// District as used by locality search rows.
    pub fn locality_district(&self) -> &str {
        first_present(&[&self.district, &self.division, &self.region])
    }

    /// District as used by single-pincode rows, which may only carry a block.
    pub fn pincode_district(&self) -> &str {
        first_present(&[&self.district, &self.division, &self.region, &self.block])
    }

    pub fn label(&self) -> &str {
        first_present(&[&self.name])
    }
}

/// External postal directory (India Post).
#[async_trait]
pub trait PostalDirectory: Send + Sync {
    /// Offices whose locality matches `query`. No match is `Ok(vec![])`.
    async fn search_locality(&self, query: &str) -> Result<Vec<PostOffice>, LocationError>;

    /// Offices registered under exactly `pincode`. No match is `Ok(vec![])`.
    async fn lookup_pincode(&self, pincode: &str) -> Result<Vec<PostOffice>, LocationError>;
}
