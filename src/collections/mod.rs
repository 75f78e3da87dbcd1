//! Record collections
//!
//! The normalized dataset is loaded once and shared read-only afterwards.

pub mod dataset;

pub use dataset::HealthDataset;
