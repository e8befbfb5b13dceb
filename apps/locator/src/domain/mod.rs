pub mod catalog;
pub mod location;
