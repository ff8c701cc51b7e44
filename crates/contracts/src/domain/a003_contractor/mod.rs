pub mod aggregate;

pub use aggregate::{AuthorityStatus, Contractor, NewContractorDto};
