//! Shared pieces for AI-backed use cases

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
