pub mod dto;
pub mod filter;
pub mod use_case;

pub use dto::{PincodeQuery, PincodeResolution, ResolutionTier};
pub use use_case::PostalCodeResolver;
