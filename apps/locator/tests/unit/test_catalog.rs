use locator::domain::catalog::{
    LOCAL_OVERRIDE_STATE, canonical_state, districts_for, is_union_territory, local_candidates,
    states,
};

#[test]
fn every_state_has_districts() {
    for state in states() {
        assert!(!districts_for(state).is_empty(), "{state} has no districts");
    }
}

#[test]
fn state_names_are_unique() {
    let mut names: Vec<_> = states().collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn provider_spellings_resolve_to_catalog_names() {
    assert_eq!(canonical_state("NCT OF DELHI"), Some("Delhi"));
    assert_eq!(canonical_state("Pondicherry"), Some("Puducherry"));
    assert_eq!(canonical_state("Jammu & Kashmir"), Some("Jammu and Kashmir"));
    assert_eq!(
        canonical_state("Andaman & Nicobar"),
        Some("Andaman and Nicobar Islands")
    );
    assert_eq!(canonical_state("Atlantis"), None);
    assert_eq!(canonical_state("  "), None);
}

#[test]
fn union_territories_are_flagged() {
    assert!(is_union_territory("Lakshadweep"));
    assert!(is_union_territory("nct of delhi"));
    assert!(!is_union_territory("Karnataka"));
}

#[test]
fn override_table_covers_every_override_district() {
    for district in districts_for(LOCAL_OVERRIDE_STATE) {
        assert!(!local_candidates(district).is_empty(), "{district} has no pincodes");
    }
}

#[test]
fn override_candidates_ignore_case() {
    assert_eq!(local_candidates("KARAIKAL").len(), 1);
    assert!(local_candidates("Chennai").is_empty());
}
