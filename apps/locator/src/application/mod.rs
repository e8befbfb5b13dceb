pub mod lookup_pincode;
pub mod resolve_pincodes;
pub mod reverse_geocode;
pub mod verify_location;
