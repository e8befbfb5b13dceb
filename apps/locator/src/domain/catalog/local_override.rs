use crate::domain::location::{
    alias::{normalize, same_state},
    value_objects::{PostalCandidate, StateKey},
};

/// The union territory whose pincodes are served only from this table.
pub const LOCAL_OVERRIDE_STATE: &str = "Puducherry";

/// Puducherry's four districts are exclaves inside Tamil Nadu, Kerala and
/// Andhra Pradesh, so India Post's locality search cannot be trusted for them.
const PUDUCHERRY_PINCODES: &[(&str, &[(&str, &str)])] = &[
    (
        "Puducherry",
        &[
            ("605001", "Puducherry HO"),
            ("605007", "Ariyankuppam"),
            ("605110", "Villianur"),
            ("605008", "Lawspet"),
            ("605014", "Pondicherry University"),
        ],
    ),
    ("Karaikal", &[("609602", "Karaikal HO")]),
    ("Mahe", &[("673310", "Mahe HO")]),
    ("Yanam", &[("533464", "Yanam HO")]),
];

pub fn is_local_override_state(state: &StateKey) -> bool {
    same_state(state, &normalize(LOCAL_OVERRIDE_STATE))
}

/// Candidates for a Puducherry district, in table order.
pub fn local_candidates(district: &str) -> Vec<PostalCandidate> {
    let wanted = normalize(district);
    PUDUCHERRY_PINCODES
        .iter()
        .filter(|(name, _)| normalize(name) == wanted)
        .flat_map(|(_, rows)| rows.iter())
        .filter_map(|(code, label)| PostalCandidate::new(*code, *label))
        .collect()
}

/// District owning `pincode` in the override table.
pub fn local_district_for_pincode(pincode: &str) -> Option<&'static str> {
    PUDUCHERRY_PINCODES
        .iter()
        .find(|(_, rows)| rows.iter().any(|(code, _)| *code == pincode))
        .map(|(district, _)| *district)
}
