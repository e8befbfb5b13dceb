use super::dto::PincodeInfo;
use crate::domain::location::{errors::LocationError, value_objects::Pincode};
use crate::infrastructure::postal::PostalDirectory;
use std::sync::Arc;
use tracing::{info, instrument};

/// Upper-cases the first letter of each word and lower-cases the rest.
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(title_case)
}

/// Server-side single-pincode lookup backing `/api/geo/pincode/{code}`.
pub struct LookupPincodeUseCase {
    directory: Arc<dyn PostalDirectory>,
}

impl LookupPincodeUseCase {
    pub fn new(directory: Arc<dyn PostalDirectory>) -> Self {
        Self { directory }
    }

    /// Takes the first office that names a district. Offices without any
    /// district still prove the pincode exists, so the result keeps its
    /// state and leaves the district empty.
    #[instrument(skip(self), fields(pincode = %pincode))]
    pub async fn execute(&self, pincode: &Pincode) -> Result<PincodeInfo, LocationError> {
        let offices = self.directory.lookup_pincode(pincode.as_str()).await?;
        if offices.is_empty() {
            return Err(LocationError::NotFound(format!("pincode {} is not registered", pincode)));
        }

        let office = offices
            .iter()
            .find(|o| o.district.as_deref().is_some_and(|d| !d.trim().is_empty()))
            .unwrap_or(&offices[0]);

        let result = PincodeInfo {
            pincode: pincode.to_string(),
            district: non_blank(office.district.as_deref()),
            state: non_blank(office.state.as_deref()),
        };
        info!(district = ?result.district, state = ?result.state, "Pincode resolved");
        Ok(result)
    }
}
