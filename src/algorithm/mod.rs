//! Algorithm implementations for the risk engine
//!
//! Risk scoring, cohort aggregation, similar-profile queries and sampling.

pub mod cohort;
pub mod risk;
pub mod sampling;
pub mod similarity;
