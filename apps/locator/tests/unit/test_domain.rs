use locator::domain::location::{
    alias::{normalize, reported_state_matches, retry_query, RetryQuery},
    entity::{LocationSelection, VerificationStatus},
    errors::LocationError,
    events::{LocationNote, ReasonCode},
    value_objects::{Coordinates, Pincode, is_pincode},
};

#[test]
fn pincode_accepts_six_digits_only() {
    assert!(Pincode::parse("110001").is_ok());
    assert!(Pincode::parse(" 110001 ").is_ok());
    assert!(Pincode::parse("11001").is_err());
    assert!(Pincode::parse("1100011").is_err());
    assert!(matches!(Pincode::parse("12AB56"), Err(LocationError::Validation(_))));
}

#[test]
fn is_pincode_rejects_unicode_digits() {
    assert!(is_pincode("560001"));
    assert!(!is_pincode("५६०००१"));
}

#[test]
fn fresh_selection_is_unverified() {
    let selection = LocationSelection::new();
    assert_eq!(selection.status(), VerificationStatus::Unverified);
    assert!(!selection.is_verified());
    assert!(selection.holds_invariant());
}

#[test]
fn pending_never_overrides_verified() {
    let mut selection = LocationSelection::new();
    selection.mark_verified("110001");
    selection.mark_pending();
    assert_eq!(selection.status(), VerificationStatus::Verified);
}

#[test]
fn edit_from_pending_reports_a_drop() {
    let mut selection = LocationSelection::new();
    selection.edit_pincode("110001".into());
    selection.mark_pending();
    assert!(selection.edit_pincode("110002".into()));
    assert_eq!(selection.status(), VerificationStatus::Unverified);
    assert!(!selection.edit_pincode("110003".into()));
}

#[test]
fn reason_codes_use_wire_spelling() {
    assert_eq!(ReasonCode::TransportError.as_str(), "TRANSPORT_ERROR");
    assert_eq!(
        serde_json::to_value(ReasonCode::NotFound).unwrap(),
        serde_json::json!("NOT_FOUND")
    );
}

#[test]
fn notes_carry_user_messages() {
    assert_eq!(LocationNote::Verified.message(), "Location verified");
    assert!(LocationNote::PickFromList.message().contains("select from list"));
}

#[test]
fn coordinates_accept_bounds() {
    assert!(Coordinates::new(90.0, 180.0).is_ok());
    assert!(Coordinates::new(-90.0, -180.0).is_ok());
    assert!(Coordinates::new(0.0, 180.5).is_err());
}

#[test]
fn daman_and_diu_retry_by_district() {
    let state = "Dadra and Nagar Haveli and Daman and Diu";
    assert_eq!(retry_query(state, "Daman"), Some(RetryQuery::Single("Daman".into())));
    assert_eq!(
        retry_query(state, "Dadra and Nagar Haveli"),
        Some(RetryQuery::Single("Silvassa".into()))
    );
    assert_eq!(
        retry_query("Chandigarh", "Chandigarh"),
        Some(RetryQuery::Single("Chandigarh".into()))
    );
}

#[test]
fn empty_selected_state_accepts_any_report() {
    assert!(reported_state_matches(
        &normalize(""),
        &normalize("Central Delhi"),
        &normalize("Haryana")
    ));
}
