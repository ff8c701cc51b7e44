//! Wire types shared between the dashboard client and anything that talks
//! to the monitoring backend.
//!
//! Everything here is a transient view-model rebuilt from server responses.
//! Loose wire shapes (numeric ids, alternative name fields, 0/1 flags) are
//! normalized at deserialization time so the rest of the code only sees the
//! typed form.

pub mod domain;
pub mod shared;
pub mod usecases;
