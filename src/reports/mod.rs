//! Analytics payloads standing in for a real data pipeline.

pub mod catalog;
pub mod generator;

pub use catalog::{PolicyRecommendation, Severity, STATES};
pub use generator::ReportGenerator;
