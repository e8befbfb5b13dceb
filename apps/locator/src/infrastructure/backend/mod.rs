pub mod geo_client;
pub mod traits;

pub use geo_client::GeoBackendClient;
pub use traits::{BackendPincode, GeoBackend, PincodeList, ReversePlace};
