pub mod dto;
pub mod use_case;

pub use dto::PincodeInfo;
pub use use_case::LookupPincodeUseCase;
