pub mod a001_location;
pub mod a002_project;
pub mod a003_contractor;
pub mod a004_feedback;
