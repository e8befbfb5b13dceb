use super::value_objects::is_pincode;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum VerificationStatus {
    #[default]
    Unverified,
    PendingVerification,
    Verified,
}

/// The location tuple a single form instance is building up.
///
/// Fields are private: every mutation goes through a method that keeps
/// `verified` consistent with `pincode` and `last_verified_pincode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LocationSelection {
    state: Option<String>,
    district: Option<String>,
    pincode: String,
    verified: bool,
    last_verified_pincode: Option<String>,
    status: VerificationStatus,
}

impl LocationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn pincode(&self) -> &str {
        &self.pincode
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn last_verified_pincode(&self) -> Option<&str> {
        self.last_verified_pincode.as_deref()
    }

    pub fn status(&self) -> VerificationStatus {
        self.status
    }

    /// Replaces the state. Clears district, pincode and verification.
    pub fn set_state(&mut self, state: Option<String>) {
        self.state = state;
        self.district = None;
        self.pincode.clear();
        self.unverify();
    }

    /// Replaces the district. Clears pincode and verification, keeps state.
    pub fn set_district(&mut self, district: Option<String>) {
        self.district = district;
        self.pincode.clear();
        self.unverify();
    }

    /// Stores raw pincode text. Returns true if the edit dropped a verified
    /// or pending status.
    pub fn edit_pincode(&mut self, text: String) -> bool {
        let keeps_verification =
            self.verified && self.last_verified_pincode.as_deref() == Some(text.as_str());
        self.pincode = text;
        if keeps_verification {
            return false;
        }
        let was_unverified = self.status == VerificationStatus::Unverified;
        self.unverify();
        !was_unverified
    }

    pub fn mark_pending(&mut self) {
        if !self.verified {
            self.status = VerificationStatus::PendingVerification;
        }
    }

    /// Drops a pending status after a failed lookup. Verified selections are left alone.
    pub fn mark_rejected(&mut self) {
        if !self.verified {
            self.status = VerificationStatus::Unverified;
        }
    }

    /// Marks `pincode` as trusted. Callers must pass a 6-digit code.
    pub fn mark_verified(&mut self, pincode: &str) {
        debug_assert!(is_pincode(pincode));
        self.pincode = pincode.to_string();
        self.last_verified_pincode = Some(pincode.to_string());
        self.verified = true;
        self.status = VerificationStatus::Verified;
    }

    /// Fills state and district from a verified lookup without the usual
    /// invalidation cascade. A different state drops the old district even
    /// when no new one is given.
    pub fn fill_location(&mut self, state: Option<String>, district: Option<String>) {
        if let Some(state) = state {
            if self.state.as_deref() != Some(state.as_str()) {
                self.state = Some(state);
                self.district = None;
            }
        }
        if district.is_some() {
            self.district = district;
        }
    }

    /// `verified` implies a 6-digit pincode equal to the last verified one.
    pub fn holds_invariant(&self) -> bool {
        if !self.verified {
            return self.status != VerificationStatus::Verified;
        }
        self.status == VerificationStatus::Verified
            && is_pincode(&self.pincode)
            && self.last_verified_pincode.as_deref() == Some(self.pincode.as_str())
    }

    fn unverify(&mut self) {
        self.verified = false;
        self.last_verified_pincode = None;
        self.status = VerificationStatus::Unverified;
    }
}
