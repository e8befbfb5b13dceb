use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Body of `GET /api/geo/pincode/{code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PincodeInfo {
    pub pincode: String,
    pub district: Option<String>,
    pub state: Option<String>,
}
