pub mod aggregate;
pub mod verification;

pub use aggregate::{Project, ProjectDto};
pub use verification::{ChainOutcome, ChainRecord};
