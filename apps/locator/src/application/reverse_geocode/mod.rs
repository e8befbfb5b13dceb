pub mod dto;
pub mod use_case;

pub use dto::{DetectedLocation, ReverseQuery};
pub use use_case::ReverseGeocodeResolver;
