//! Dashboard session
//!
//! Holds the read-only dataset handle, the mutable what-if profile and the
//! cohort report computed once at load. Every profile mutation rescans the
//! dataset synchronously and notifies the observer, if any, before
//! returning the new assessment.

use std::fmt;

use serde::Serialize;

use crate::algorithm::cohort::{
    AgeOutcomeRow, CohortReport, ConditionPrevalence, HistogramBin, SummaryStatistics,
};
use crate::algorithm::risk::{ProfileScore, RiskLevel, score_profile};
use crate::algorithm::sampling::{DisplayView, SampleCaps, SampleMode, Sampler};
use crate::algorithm::similarity::{
    CohortQuery, DEFAULT_NEIGHBOR_TOLERANCE, LinearScan, SimilarCohort, SimilarSummary,
    risk_factor_neighbors,
};
use crate::async_io::{LoadReport, load_dataset};
use crate::collections::HealthDataset;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::models::{ConditionKind, HealthRecord, UserProfile};

/// Score, level and similar-cohort outcome for the current profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Rounded composite score
    pub score: f64,
    /// Level band
    pub level: RiskLevel,
    /// Size and diabetes rate of the similar cohort
    pub similar: SimilarSummary,
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Risk score {:.1} ({}); {} similar profiles, {:.1}% with diabetes",
            self.score,
            self.level.display_label(),
            self.similar.count,
            self.similar.diabetes_rate_pct
        )
    }
}

/// Receives every assessment produced by a profile mutation
pub trait RiskObserver {
    /// Called after the profile changed and was rescored
    fn on_assessment(&mut self, profile: &UserProfile, assessment: &RiskAssessment);
}

impl<F> RiskObserver for F
where
    F: FnMut(&UserProfile, &RiskAssessment),
{
    fn on_assessment(&mut self, profile: &UserProfile, assessment: &RiskAssessment) {
        self(profile, assessment);
    }
}

/// Context for one interactive dashboard
pub struct DashboardSession {
    dataset: HealthDataset,
    report: CohortReport,
    profile: UserProfile,
    query: Box<dyn CohortQuery + Send + Sync>,
    sampler: Sampler,
    sample_caps: SampleCaps,
    observer: Option<Box<dyn RiskObserver + Send>>,
}

impl fmt::Debug for DashboardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardSession")
            .field("records", &self.dataset.len())
            .field("profile", &self.profile)
            .field("sample_caps", &self.sample_caps)
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl DashboardSession {
    /// Create a session over an already loaded dataset
    #[must_use]
    pub fn new(dataset: HealthDataset, config: &EngineConfig) -> Self {
        let report = CohortReport::compute(&dataset);
        Self {
            dataset,
            report,
            profile: UserProfile::default(),
            query: Box::new(LinearScan::new(config.similarity)),
            sampler: Sampler::new(config.sample_seed),
            sample_caps: config.sample_caps,
            observer: None,
        }
    }

    /// Load the dataset as configured and open a session over it
    pub async fn load(config: &EngineConfig) -> (Self, LoadReport) {
        let outcome = load_dataset(&config.loader, &config.synthetic).await;
        (Self::new(outcome.dataset, config), outcome.report)
    }

    /// Replace the similar-profile query strategy
    #[must_use]
    pub fn with_query(mut self, query: impl CohortQuery + Send + Sync + 'static) -> Self {
        self.query = Box::new(query);
        self
    }

    /// Register the observer notified on every profile mutation
    #[must_use]
    pub fn with_observer(mut self, observer: impl RiskObserver + Send + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Shared dataset handle
    #[must_use]
    pub const fn dataset(&self) -> &HealthDataset {
        &self.dataset
    }

    /// Current what-if profile
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Aggregates computed at load
    #[must_use]
    pub const fn cohort_report(&self) -> &CohortReport {
        &self.report
    }

    fn reassess(&mut self) -> RiskAssessment {
        let assessment = self.assessment();
        log::debug!("Profile changed: {assessment}");
        if let Some(observer) = self.observer.as_mut() {
            observer.on_assessment(&self.profile, &assessment);
        }
        assessment
    }

    /// Assess the current profile without notifying the observer
    #[must_use]
    pub fn assessment(&self) -> RiskAssessment {
        let ProfileScore { score, level } = self.score_profile();
        RiskAssessment {
            score,
            level,
            similar: self.find_similar().summary(),
        }
    }

    /// Set the profile age
    pub fn set_age(&mut self, age: f64) -> RiskAssessment {
        self.profile.age = age;
        self.reassess()
    }

    /// Set the profile BMI
    pub fn set_bmi(&mut self, bmi: f64) -> RiskAssessment {
        self.profile.bmi = bmi;
        self.reassess()
    }

    /// Toggle a condition on the profile
    ///
    /// # Errors
    /// Returns `UnsupportedCondition` for conditions outside the
    /// interactive profile; the profile is left unchanged.
    pub fn set_condition(
        &mut self,
        condition: ConditionKind,
        present: bool,
    ) -> Result<RiskAssessment> {
        self.profile.set_condition(condition, present)?;
        Ok(self.reassess())
    }

    /// Replace the whole profile
    pub fn set_profile(&mut self, profile: UserProfile) -> RiskAssessment {
        self.profile = profile;
        self.reassess()
    }

    /// Restore the startup profile
    pub fn reset_profile(&mut self) -> RiskAssessment {
        self.set_profile(UserProfile::default())
    }

    /// Headline population figures
    #[must_use]
    pub const fn summary_statistics(&self) -> &SummaryStatistics {
        &self.report.summary
    }

    /// Risk-score histogram
    #[must_use]
    pub fn risk_histogram(&self) -> &[HistogramBin] {
        &self.report.histogram
    }

    /// Prevalence of the primary conditions
    #[must_use]
    pub fn condition_prevalence(&self) -> &[ConditionPrevalence] {
        &self.report.prevalence
    }

    /// Age by outcome cross-tabulation
    #[must_use]
    pub fn age_outcome_breakdown(&self) -> &[AgeOutcomeRow] {
        &self.report.age_outcomes
    }

    /// Score the current profile
    #[must_use]
    pub fn score_profile(&self) -> ProfileScore {
        score_profile(&self.profile)
    }

    /// Records similar to the current profile
    #[must_use]
    pub fn find_similar(&self) -> SimilarCohort<'_> {
        self.query.find_similar(&self.dataset, &self.profile)
    }

    /// Records with a risk-factor count close to `target`'s
    #[must_use]
    pub fn risk_factor_neighbors(&self, target: &HealthRecord) -> Vec<&HealthRecord> {
        risk_factor_neighbors(&self.dataset, target, DEFAULT_NEIGHBOR_TOLERANCE)
    }

    /// Draw a fresh sample of up to `sample_count` records
    pub fn sample(&mut self, sample_count: usize, mode: SampleMode) -> Vec<HealthRecord> {
        self.sampler.sample(&self.dataset, sample_count, mode)
    }

    /// Draw the working set for a display view
    pub fn sample_for(&mut self, view: DisplayView) -> Vec<HealthRecord> {
        let (sample_count, mode) = self.sample_caps.plan(view);
        self.sample(sample_count, mode)
    }
}
