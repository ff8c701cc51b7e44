pub mod filter;
pub mod form;
pub mod wire;

pub use filter::LocationFilter;
pub use form::{Attachment, FormField, FormPayload};
