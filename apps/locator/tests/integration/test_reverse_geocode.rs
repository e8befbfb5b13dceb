use super::helpers::{FakeDirectory, FixedPosition, MockBackend};
use locator::{
    application::{
        reverse_geocode::{DetectedLocation, ReverseGeocodeResolver},
        verify_location::{FormKind, LocationEngine},
    },
    domain::location::{
        errors::{LocationError, ReverseGeocodeError},
        events::LocationNote,
        value_objects::Coordinates,
    },
    infrastructure::backend::ReversePlace,
};
use std::sync::Arc;

fn backend_returning(place: ReversePlace) -> MockBackend {
    let mut backend = MockBackend::new();
    backend
        .expect_reverse()
        .times(1)
        .returning(move |_| Ok(place.clone()));
    backend
}

#[tokio::test]
async fn reverse_lookup_cleans_pincode_and_remaps_state() {
    let backend = backend_returning(ReversePlace {
        pincode: Some(" 194 101".into()),
        state: Some("Jammu and Kashmir".into()),
        district: Some("Leh".into()),
    });
    let resolver = ReverseGeocodeResolver::new(Some(Arc::new(backend)));

    let detected = resolver.execute(34.15, 77.58).await.expect("location");

    assert_eq!(
        detected,
        DetectedLocation {
            pincode: "194101".into(),
            state: Some("Ladakh".into()),
            district: Some("Leh".into()),
        }
    );
}

#[tokio::test]
async fn provider_state_spelling_is_canonicalized() {
    let backend = backend_returning(ReversePlace {
        pincode: Some("110001".into()),
        state: Some("NCT of Delhi".into()),
        district: Some("  ".into()),
    });
    let resolver = ReverseGeocodeResolver::new(Some(Arc::new(backend)));

    let detected = resolver.execute(28.63, 77.22).await.unwrap();

    assert_eq!(detected.state.as_deref(), Some("Delhi"));
    assert_eq!(detected.district, None);
}

#[tokio::test]
async fn missing_pincode_is_reported() {
    let backend = backend_returning(ReversePlace {
        pincode: Some("1100".into()),
        state: Some("Delhi".into()),
        district: None,
    });
    let resolver = ReverseGeocodeResolver::new(Some(Arc::new(backend)));

    let result = resolver.execute(28.63, 77.22).await;

    assert_eq!(result, Err(ReverseGeocodeError::MissingPincode));
}

#[tokio::test]
async fn invalid_coordinates_make_no_call() {
    let mut backend = MockBackend::new();
    backend.expect_reverse().never();
    let resolver = ReverseGeocodeResolver::new(Some(Arc::new(backend)));

    let result = resolver.execute(120.0, 77.22).await;

    assert!(matches!(result, Err(ReverseGeocodeError::InvalidCoordinates(_))));
}

#[tokio::test]
async fn backend_failure_surfaces_as_transport_error() {
    let mut backend = MockBackend::new();
    backend
        .expect_reverse()
        .returning(|_| Err(LocationError::Transport("502".into())));
    let resolver = ReverseGeocodeResolver::new(Some(Arc::new(backend)));

    let result = resolver.execute(28.63, 77.22).await;

    assert_eq!(result, Err(ReverseGeocodeError::Transport("502".into())));
}

#[tokio::test]
async fn without_backend_detection_is_unavailable() {
    let resolver = ReverseGeocodeResolver::new(None);

    assert!(matches!(
        resolver.execute(28.63, 77.22).await,
        Err(ReverseGeocodeError::Transport(_))
    ));
}

#[tokio::test]
async fn detected_location_prefills_and_verifies_the_form() {
    let directory = Arc::new(FakeDirectory::new());
    let backend = backend_returning(ReversePlace {
        pincode: Some("110001".into()),
        state: Some("Delhi".into()),
        district: Some("Central Delhi".into()),
    });
    let session = LocationEngine::new(directory.clone(), Some(Arc::new(backend)))
        .open_session(FormKind::Registration);
    session.set_state("Goa");

    let location = session
        .locate(&FixedPosition(Ok(Coordinates { lat: 28.63, lon: 77.22 })))
        .await
        .expect("detected location");

    assert_eq!(location.pincode, "110001");
    let selection = session.selection();
    assert_eq!(selection.state(), Some("Delhi"));
    assert_eq!(selection.district(), Some("Central Delhi"));
    assert!(session.can_submit());
    assert_eq!(session.note(), LocationNote::DetectedAndVerified);
    assert_eq!(directory.lookup_calls(), 0);
}

#[tokio::test]
async fn denied_permission_leaves_the_form_alone() {
    let mut backend = MockBackend::new();
    backend.expect_reverse().never();
    let session = LocationEngine::new(Arc::new(FakeDirectory::new()), Some(Arc::new(backend)))
        .open_session(FormKind::Search);
    session.set_state("Goa");
    let before = session.selection();

    let result = session
        .locate(&FixedPosition(Err(ReverseGeocodeError::PermissionDenied)))
        .await;

    assert_eq!(result, Err(ReverseGeocodeError::PermissionDenied));
    assert_eq!(session.selection(), before);
    assert_eq!(session.note(), LocationNote::Prompt);
}
