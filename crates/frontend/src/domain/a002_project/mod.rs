pub mod api;
pub mod verifier;

pub use verifier::{ChainVerifier, VerifierState, EXPLORER_URL};
