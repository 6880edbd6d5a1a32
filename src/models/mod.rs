//! Data models

pub mod task;

pub use task::*;
