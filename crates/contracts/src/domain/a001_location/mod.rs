pub mod aggregate;

pub use aggregate::{LocationLevel, LocationNode, LocationRecord};
