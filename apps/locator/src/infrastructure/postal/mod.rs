pub mod india_post;
pub mod traits;

pub use india_post::IndiaPostClient;
pub use traits::{PostOffice, PostalDirectory};
