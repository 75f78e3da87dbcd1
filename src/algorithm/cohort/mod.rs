//! Cohort aggregation over the full dataset
//!
//! Population totals, the risk-score histogram, condition prevalence and
//! the age by outcome cross-tabulation. Everything here is a pure pass over
//! a dataset snapshot; an empty dataset yields zero counts and 0% rates.

pub mod breakdown;
pub mod statistics;

pub use breakdown::{AgeOutcomeRow, age_outcome_breakdown};
pub use statistics::{
    CohortReport, ConditionPrevalence, HistogramBin, SummaryStatistics, condition_prevalence,
    max_risk_score, risk_histogram, scatter_axis_max, summary_statistics,
};

/// Share of `count` in `total` as a percentage; zero population is 0%
#[must_use]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
