use super::helpers::{FakeDirectory, MockBackend, MockDirectory, office};
use locator::{
    application::{
        lookup_pincode::LookupPincodeUseCase,
        resolve_pincodes::{PostalCodeResolver, ResolutionTier},
        verify_location::{FormKind, LocationEngine},
    },
    domain::location::{
        alias::LAKSHADWEEP_ISLANDS,
        errors::LocationError,
        value_objects::{Pincode, PostalCandidate},
    },
    infrastructure::{
        backend::{BackendPincode, PincodeList},
        postal::PostOffice,
    },
};
use std::sync::Arc;

fn candidate(code: &str, label: &str) -> PostalCandidate {
    PostalCandidate::new(code, label).expect("valid candidate")
}

#[tokio::test]
async fn puducherry_is_served_locally() {
    let mut directory = MockDirectory::new();
    directory.expect_search_locality().never();
    directory.expect_lookup_pincode().never();
    let mut backend = MockBackend::new();
    backend.expect_pincodes_for().never();

    let resolver = PostalCodeResolver::new(Arc::new(directory), Some(Arc::new(backend)));
    let resolution = resolver.execute("Puducherry", "Yanam").await;

    assert_eq!(resolution.tier, ResolutionTier::LocalOverride);
    assert_eq!(resolution.candidates, vec![candidate("533464", "Yanam HO")]);
}

#[tokio::test]
async fn backend_list_wins_and_is_deduplicated() {
    let mut directory = MockDirectory::new();
    directory.expect_search_locality().never();
    let mut backend = MockBackend::new();
    backend
        .expect_pincodes_for()
        .withf(|state, district| state == "Delhi" && district == "Central Delhi")
        .times(1)
        .returning(|_, _| {
            Ok(PincodeList {
                pincodes: vec![
                    BackendPincode {
                        pincode: "110001".into(),
                        post_office_name: Some("Connaught Place".into()),
                    },
                    BackendPincode {
                        pincode: "110001".into(),
                        post_office_name: Some("Parliament Street".into()),
                    },
                    BackendPincode {
                        pincode: "11000".into(),
                        post_office_name: None,
                    },
                ],
            })
        });

    let resolver = PostalCodeResolver::new(Arc::new(directory), Some(Arc::new(backend)));
    let resolution = resolver.execute(" Delhi ", "Central Delhi").await;

    assert_eq!(resolution.tier, ResolutionTier::Backend);
    assert_eq!(resolution.candidates, vec![candidate("110001", "Connaught Place")]);
}

#[tokio::test]
async fn backend_failure_falls_back_to_locality_search() {
    let directory = Arc::new(FakeDirectory::new().with_locality(
        "Central Delhi",
        vec![
            office("Connaught Place", "110001", "Delhi", "Central Delhi"),
            office("Karol Bagh", "110005", "Delhi", "West Delhi"),
            office("Gurgaon", "122001", "Haryana", "Central Delhi"),
        ],
    ));
    let mut backend = MockBackend::new();
    backend
        .expect_pincodes_for()
        .returning(|_, _| Err(LocationError::Transport("connection refused".into())));

    let resolver = PostalCodeResolver::new(directory.clone(), Some(Arc::new(backend)));
    let resolution = resolver.execute("Delhi", "Central Delhi").await;

    assert_eq!(resolution.tier, ResolutionTier::Locality);
    assert_eq!(resolution.candidates, vec![candidate("110001", "Connaught Place")]);
    assert_eq!(directory.locality_calls(), 1);
}

#[tokio::test]
async fn provider_spellings_match_catalog_names() {
    let directory = Arc::new(FakeDirectory::new().with_locality(
        "North and Middle Andaman",
        vec![office("Mayabunder", "744204", "Andaman & Nicobar", "North Middle Andaman")],
    ));
    let resolver = PostalCodeResolver::without_backend(directory);

    let resolution = resolver
        .execute("Andaman and Nicobar Islands", "North and Middle Andaman")
        .await;

    assert_eq!(resolution.tier, ResolutionTier::Locality);
    assert_eq!(resolution.candidates, vec![candidate("744204", "Mayabunder")]);
}

#[tokio::test]
async fn ladakh_retries_with_leh_and_keeps_legacy_rows() {
    let directory = Arc::new(FakeDirectory::new().with_locality(
        "Leh",
        vec![
            office("Kargil HO", "194103", "Jammu and Kashmir", "Kargil"),
            office("Leh HO", "194101", "Jammu and Kashmir", "Leh"),
        ],
    ));
    let resolver = PostalCodeResolver::without_backend(directory.clone());

    let resolution = resolver.execute("Ladakh", "Kargil").await;

    assert_eq!(resolution.tier, ResolutionTier::StateRetry);
    assert_eq!(resolution.candidates, vec![candidate("194103", "Kargil HO")]);
    assert_eq!(directory.locality_calls(), 2);
}

#[tokio::test]
async fn lakshadweep_queries_each_island_in_order() {
    let mut directory = MockDirectory::new();
    directory
        .expect_search_locality()
        .withf(|query| query == "Lakshadweep")
        .times(1)
        .returning(|_| Ok(Vec::new()));
    directory
        .expect_search_locality()
        .withf(|query| query == "Kavaratti")
        .times(1)
        .returning(|_| {
            Ok(vec![office("Kavaratti HO", "682555", "Lakshadweep", "Lakshadweep")])
        });
    directory
        .expect_search_locality()
        .withf(|query| query == "Minicoy")
        .times(1)
        .returning(|_| Ok(vec![office("Minicoy", "682559", "Lakshadweep", "Lakshadweep")]));
    directory
        .expect_search_locality()
        .withf(|query| query != "Lakshadweep" && query != "Kavaratti" && query != "Minicoy")
        .times(LAKSHADWEEP_ISLANDS.len() - 2)
        .returning(|_| Err(LocationError::Transport("timeout".into())));

    let resolver = PostalCodeResolver::without_backend(Arc::new(directory));
    let resolution = resolver.execute("Lakshadweep", "Lakshadweep").await;

    assert_eq!(resolution.tier, ResolutionTier::StateRetry);
    assert_eq!(
        resolution.candidates,
        vec![
            candidate("682555", "Kavaratti HO"),
            candidate("682559", "Minicoy"),
        ]
    );
}

#[tokio::test]
async fn regular_states_get_no_retry() {
    let directory = Arc::new(FakeDirectory::new());
    let resolver = PostalCodeResolver::without_backend(directory.clone());

    let resolution = resolver.execute("Karnataka", "Udupi").await;

    assert!(resolution.candidates.is_empty());
    assert_eq!(resolution.tier, ResolutionTier::Exhausted);
    assert_eq!(directory.locality_calls(), 1);
}

#[tokio::test]
async fn empty_district_makes_no_calls() {
    let mut directory = MockDirectory::new();
    directory.expect_search_locality().never();
    let resolver = PostalCodeResolver::without_backend(Arc::new(directory));

    assert!(resolver.resolve("Delhi", "  ").await.is_empty());
}

#[tokio::test]
async fn session_keeps_candidates_for_current_selection() {
    let directory = Arc::new(FakeDirectory::new().with_locality(
        "Central Delhi",
        vec![office("Connaught Place", "110001", "Delhi", "Central Delhi")],
    ));
    let session = LocationEngine::new(directory, None).open_session(FormKind::Registration);
    session.set_state("Delhi");
    session.set_district("Central Delhi");

    let loaded = session.load_candidates().await;

    assert_eq!(loaded, vec![candidate("110001", "Connaught Place")]);
    assert_eq!(session.candidates(), loaded);

    session.set_district("New Delhi");
    assert!(session.candidates().is_empty());
}

#[tokio::test]
async fn pincode_lookup_prefers_rows_with_a_district() {
    let directory = Arc::new(FakeDirectory::new().with_pincode(
        "403001",
        vec![
            PostOffice {
                name: Some("Panaji".into()),
                state: Some("GOA".into()),
                ..Default::default()
            },
            office("Panaji HO", "403001", "GOA", "NORTH GOA"),
        ],
    ));
    let lookup = LookupPincodeUseCase::new(directory);

    let info = lookup
        .execute(&Pincode::parse("403001").unwrap())
        .await
        .expect("registered pincode");

    assert_eq!(info.district.as_deref(), Some("North Goa"));
    assert_eq!(info.state.as_deref(), Some("Goa"));
}

#[tokio::test]
async fn pincode_lookup_reports_unknown_codes() {
    let lookup = LookupPincodeUseCase::new(Arc::new(FakeDirectory::new()));

    let result = lookup.execute(&Pincode::parse("999999").unwrap()).await;

    assert!(matches!(result, Err(LocationError::NotFound(_))));
}
