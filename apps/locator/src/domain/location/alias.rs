//! State and district name reconciliation.
//!
//! India Post, the owning backend and the form catalog all spell
//! administrative units differently. Everything here works on [`StateKey`]s
//! and on small fixed tables, so every accepted spelling is enumerable.

use super::value_objects::StateKey;

/// Canonicalizes a free-form state or district name.
///
/// Lower-cases, expands `&` to `and`, collapses every run of
/// non-alphanumeric characters into one space and trims. Total: empty input
/// yields an empty key.
pub fn normalize(raw: &str) -> StateKey {
    let expanded = raw.to_lowercase().replace('&', " and ");
    let key = expanded
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    StateKey(key)
}

/// Spellings that denote the same state or union territory.
/// First entry of each row is the catalog key.
const STATE_ALIASES: &[&[&str]] = &[
    &["delhi", "nct of delhi"],
    &["jammu and kashmir", "jammu kashmir"],
    &[
        "dadra and nagar haveli and daman and diu",
        "dadra and nagar haveli",
        "daman and diu",
    ],
    &["puducherry", "pondicherry"],
    &[
        "andaman and nicobar islands",
        "andaman and nicobar",
        "andaman nicobar",
        "andaman nicobar islands",
    ],
];

/// States whose postal data may still be filed under the state they were
/// carved out of: (selected state, reported state).
const LEGACY_PARENT_STATES: &[(&str, &str)] = &[("ladakh", "jammu and kashmir")];

/// Union-territory exclaves that India Post files under the surrounding
/// state: (union territory, district, reported state).
///
/// Keyed on district names, so a renaming on the provider side silently
/// stops these rows from matching.
const ENCLAVES: &[(&str, &str, &str)] = &[
    ("puducherry", "mahe", "kerala"),
    ("puducherry", "yanam", "andhra pradesh"),
    ("puducherry", "karaikal", "tamil nadu"),
];

/// Alternate district spellings used by India Post: (state, district, aliases).
const DISTRICT_ALIASES: &[(&str, &str, &[&str])] = &[
    ("puducherry", "puducherry", &["pondicherry"]),
    (
        "andaman and nicobar islands",
        "north and middle andaman",
        &["north middle andaman"],
    ),
    ("andaman and nicobar islands", "south nicobar", &["nicobar"]),
    (
        "dadra and nagar haveli and daman and diu",
        "dadra and nagar haveli",
        &["dadra nagar haveli"],
    ),
];

/// Districts that moved to a newer union territory after a split:
/// (old state, districts, new state display name).
const SPLIT_TERRITORIES: &[(&str, &[&str], &str)] =
    &[("jammu and kashmir", &["leh", "kargil"], "Ladakh")];

/// Maps an alias key to the catalog key of its equivalence row.
pub fn canonical_key(key: &StateKey) -> StateKey {
    STATE_ALIASES
        .iter()
        .find(|row| row.contains(&key.as_str()))
        .map(|row| StateKey(row[0].to_string()))
        .unwrap_or_else(|| key.clone())
}

/// True when both keys denote the same state or union territory.
pub fn same_state(a: &StateKey, b: &StateKey) -> bool {
    a == b || canonical_key(a) == canonical_key(b)
}

/// Decides whether a post office reported under `reported` can belong to
/// the user's selected state and district.
pub fn reported_state_matches(
    selected_state: &StateKey,
    selected_district: &StateKey,
    reported: &StateKey,
) -> bool {
    if selected_state.is_empty() || same_state(selected_state, reported) {
        return true;
    }
    let selected = canonical_key(selected_state);
    let reported = canonical_key(reported);

    let legacy = LEGACY_PARENT_STATES
        .iter()
        .any(|(state, parent)| selected == *state && reported == *parent);

    legacy
        || ENCLAVES.iter().any(|(state, district, host)| {
            selected == *state && selected_district == district && reported == *host
        })
}

/// Decides whether a reported district name matches the selected one.
pub fn district_matches(state: &StateKey, district: &StateKey, reported: &StateKey) -> bool {
    if district == reported {
        return true;
    }
    let state = canonical_key(state);
    DISTRICT_ALIASES
        .iter()
        .filter(|(s, d, _)| state == *s && district == d)
        .any(|(_, _, aliases)| aliases.contains(&reported.as_str()))
}

/// Remaps a (state, district) pair reported under a pre-split state to the
/// union territory that now owns the district.
pub fn remap_split_territory(state: &str, district: &str) -> Option<&'static str> {
    let state = canonical_key(&normalize(state));
    let district = normalize(district);
    SPLIT_TERRITORIES
        .iter()
        .find(|(old, districts, _)| state == *old && districts.contains(&district.as_str()))
        .map(|(_, _, new_state)| *new_state)
}

/// Known Lakshadweep islands. The locality search does not index the
/// district name, so each island is queried separately.
pub const LAKSHADWEEP_ISLANDS: &[&str] = &[
    "Kavaratti", "Agatti", "Amini", "Minicoy", "Andrott", "Kalpeni", "Kadmat", "Kiltan",
    "Chetlat", "Bitra",
];

/// What to search for when the district name itself returns nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryQuery {
    Single(String),
    Each(&'static [&'static str]),
}

/// Per-state fallback search terms for union territories.
///
/// Returns `None` for states that get no second attempt. Puducherry has no
/// entry; it is served from the local override table.
pub fn retry_query(state: &str, district: &str) -> Option<RetryQuery> {
    let state_key = canonical_key(&normalize(state));
    let district_key = normalize(district);

    let term = match state_key.as_str() {
        "andaman and nicobar islands" => "Andaman",
        "lakshadweep" => return Some(RetryQuery::Each(LAKSHADWEEP_ISLANDS)),
        "dadra and nagar haveli and daman and diu" => {
            if district_key.as_str().contains("daman") {
                "Daman"
            } else if district_key.as_str().contains("diu") {
                "Diu"
            } else {
                "Silvassa"
            }
        }
        "ladakh" => "Leh",
        "delhi" => "Delhi",
        "jammu and kashmir" => "Kashmir",
        "chandigarh" => return Some(RetryQuery::Single(state.trim().to_string())),
        _ => return None,
    };
    Some(RetryQuery::Single(term.to_string()))
}
