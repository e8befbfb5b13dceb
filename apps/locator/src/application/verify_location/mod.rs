pub mod dto;
pub mod session;
pub mod use_case;

pub use dto::{FormKind, VerificationOutcome, VerifiedLocation};
pub use session::{LocationSession, PincodeEdit, VerificationTicket};
pub use use_case::LocationEngine;
