//! Similar-profile cohorts
//!
//! Finds the records that resemble a profile closely enough to serve as a
//! reference group for the personal risk calculator.

pub mod criteria;
pub mod neighbors;
pub mod query;

pub use criteria::SimilarityCriteria;
pub use neighbors::{DEFAULT_NEIGHBOR_TOLERANCE, risk_factor_neighbors};
pub use query::{CohortQuery, LinearScan, SimilarCohort, SimilarSummary};
