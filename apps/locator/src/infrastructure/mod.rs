pub mod backend;
pub mod cache;
pub mod geocoding;
pub mod http;
pub mod postal;
