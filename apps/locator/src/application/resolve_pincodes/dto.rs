use crate::domain::location::value_objects::PostalCandidate;
use crate::infrastructure::backend::{BackendPincode, PincodeList};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

/// Which source produced a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResolutionTier {
    LocalOverride,
    Backend,
    Locality,
    StateRetry,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PincodeResolution {
    pub tier: ResolutionTier,
    pub candidates: Vec<PostalCandidate>,
}

impl PincodeResolution {
    pub fn exhausted() -> Self {
        Self {
            tier: ResolutionTier::Exhausted,
            candidates: Vec::new(),
        }
    }
}

impl From<PincodeResolution> for PincodeList {
    fn from(resolution: PincodeResolution) -> Self {
        Self {
            pincodes: resolution
                .candidates
                .into_iter()
                .map(|candidate| BackendPincode {
                    pincode: candidate.code,
                    post_office_name: Some(candidate.label),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct PincodeQuery {
    #[validate(length(min = 1, max = 100, message = "district is required"))]
    pub district: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub state: String,
}
