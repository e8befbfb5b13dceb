use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Location reported for a coordinate pair, ready to pre-fill a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DetectedLocation {
    pub pincode: String,
    pub state: Option<String>,
    pub district: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReverseQuery {
    pub lat: f64,
    pub lon: f64,
}
