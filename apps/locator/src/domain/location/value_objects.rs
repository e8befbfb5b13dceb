use super::errors::LocationError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use validator::Validate;

lazy_static! {
    static ref PINCODE_REGEX: regex::Regex = regex::Regex::new(r"^[0-9]{6}$").unwrap();
}

/// Returns true when `text` is exactly six ASCII digits.
pub fn is_pincode(text: &str) -> bool {
    PINCODE_REGEX.is_match(text)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct Pincode {
    #[validate(regex(path = *PINCODE_REGEX))]
    pub value: String,
}

impl Pincode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let pincode = Self { value };
        pincode.validate()?;
        Ok(pincode)
    }

    /// Parses user-entered text, trimming surrounding whitespace.
    pub fn parse(text: &str) -> Result<Self, LocationError> {
        Self::new(text.trim().to_string()).map_err(|_| {
            LocationError::Validation(format!("pincode must be 6 digits, got {:?}", text.trim()))
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Pincode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Normalized comparison key for a state or district name.
///
/// Built only by [`crate::domain::location::alias::normalize`]; never shown to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(pub(crate) String);

impl StateKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for StateKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A postal code offered to the user together with its post office name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PostalCandidate {
    pub code: String,
    pub label: String,
}

impl PostalCandidate {
    /// Builds a candidate, dropping rows whose code is not a 6-digit pincode.
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Option<Self> {
        let code = code.into().trim().to_string();
        if !is_pincode(&code) {
            return None;
        }
        Some(Self {
            code,
            label: label.into().trim().to_string(),
        })
    }
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self, LocationError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(LocationError::Validation("coordinates must be finite".into()));
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::Validation(format!(
                "coordinates out of range: {lat},{lon}"
            )));
        }
        Ok(Self { lat, lon })
    }

    /// Cache key with coordinates rounded to roughly 100 m.
    pub fn cache_key(&self) -> String {
        format!("{:.3},{:.3}", self.lat, self.lon)
    }
}
