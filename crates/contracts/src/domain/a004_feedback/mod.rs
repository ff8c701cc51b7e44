pub mod aggregate;

pub use aggregate::Feedback;
