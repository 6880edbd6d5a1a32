//! HTTP handlers

pub mod health;
pub mod dashboard;
pub mod analysis;
pub mod prediction;
pub mod policies;
pub mod tasks;
