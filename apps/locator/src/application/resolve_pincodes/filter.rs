use crate::domain::location::{
    alias::{district_matches, normalize, reported_state_matches},
    value_objects::{PostalCandidate, StateKey},
};
use crate::infrastructure::backend::PincodeList;
use crate::infrastructure::postal::PostOffice;
use std::collections::HashSet;

/// Keeps the post offices that belong to one (state, district) selection.
pub struct SelectionFilter {
    state: StateKey,
    district: StateKey,
}

impl SelectionFilter {
    pub fn new(state: &str, district: &str) -> Self {
        Self {
            state: normalize(state),
            district: normalize(district),
        }
    }

    pub fn accepts(&self, office: &PostOffice) -> bool {
        let reported_state = normalize(office.reported_state());
        if !reported_state_matches(&self.state, &self.district, &reported_state) {
            return false;
        }
        let reported_district = normalize(office.locality_district());
        district_matches(&self.state, &self.district, &reported_district)
    }

    /// Accepted offices as candidates, in input order.
    pub fn candidates(&self, offices: Vec<PostOffice>) -> Vec<PostalCandidate> {
        dedup_by_code(
            offices
                .into_iter()
                .filter(|office| self.accepts(office))
                .filter_map(|office| {
                    PostalCandidate::new(office.pincode.clone().unwrap_or_default(), office.label())
                }),
        )
    }
}

/// Drops repeated codes, keeping the first occurrence and its label.
pub fn dedup_by_code(candidates: impl IntoIterator<Item = PostalCandidate>) -> Vec<PostalCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.code.clone()))
        .collect()
}

pub fn candidates_from_backend(list: PincodeList) -> Vec<PostalCandidate> {
    dedup_by_code(list.pincodes.into_iter().filter_map(|row| {
        PostalCandidate::new(row.pincode, row.post_office_name.unwrap_or_default())
    }))
}
