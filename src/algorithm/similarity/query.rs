//! Similar-profile cohort queries

use serde::Serialize;

use crate::algorithm::cohort::percentage;
use crate::algorithm::risk;
use crate::algorithm::similarity::SimilarityCriteria;
use crate::models::{DiabetesStatus, HealthRecord, RiskProfile};

/// Records similar to a profile and their diabetes rate
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarCohort<'a> {
    /// Matching records, in dataset order
    pub members: Vec<&'a HealthRecord>,
    /// Members with diabetes
    pub diabetes_count: usize,
    /// Percentage of members with diabetes, 0 for an empty cohort
    pub diabetes_rate_pct: f64,
}

impl SimilarCohort<'_> {
    /// Count and rate without the member list
    #[must_use]
    pub fn summary(&self) -> SimilarSummary {
        SimilarSummary {
            count: self.members.len(),
            diabetes_rate_pct: self.diabetes_rate_pct,
        }
    }
}

/// Size and outcome rate of a similar-profile cohort
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarSummary {
    /// Number of similar records
    pub count: usize,
    /// Percentage of similar records with diabetes
    pub diabetes_rate_pct: f64,
}

/// Strategy for finding records similar to a profile
///
/// Callers depend on this trait rather than the scan itself, so an indexed
/// implementation (for example one sorted on risk score) can be swapped in.
pub trait CohortQuery {
    /// Find the cohort of records similar to `profile`
    fn find_similar<'a>(
        &self,
        records: &'a [HealthRecord],
        profile: &dyn RiskProfile,
    ) -> SimilarCohort<'a>;
}

/// Full linear scan over the dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan {
    criteria: SimilarityCriteria,
}

impl LinearScan {
    /// Create a scan with the given windows
    #[must_use]
    pub const fn new(criteria: SimilarityCriteria) -> Self {
        Self { criteria }
    }

    /// Windows used by this scan
    #[must_use]
    pub const fn criteria(&self) -> &SimilarityCriteria {
        &self.criteria
    }
}

impl CohortQuery for LinearScan {
    fn find_similar<'a>(
        &self,
        records: &'a [HealthRecord],
        profile: &dyn RiskProfile,
    ) -> SimilarCohort<'a> {
        let score = risk::score(profile);
        let (age, bmi) = (profile.age(), profile.bmi());

        let members: Vec<&HealthRecord> = records
            .iter()
            .filter(|r| self.criteria.is_match(r, score, age, bmi))
            .collect();
        let diabetes_count = members
            .iter()
            .filter(|r| r.diabetes_status() == DiabetesStatus::Diabetes)
            .count();

        SimilarCohort {
            diabetes_rate_pct: percentage(diabetes_count, members.len()),
            diabetes_count,
            members,
        }
    }
}
