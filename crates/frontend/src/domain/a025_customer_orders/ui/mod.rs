pub mod dashboard;
pub mod details;
pub mod tracking;
