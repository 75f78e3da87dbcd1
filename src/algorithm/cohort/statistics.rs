//! Population statistics and summaries

use std::fmt;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::algorithm::cohort::{AgeOutcomeRow, age_outcome_breakdown, percentage};
use crate::algorithm::risk::HIGH_RISK_THRESHOLD;
use crate::error::Result;
use crate::models::{ConditionKind, DiabetesStatus, HealthRecord};

/// Headline population figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStatistics {
    /// Number of records
    pub total: usize,
    /// Number of records with diabetes
    pub diabetes_count: usize,
    /// Percentage with diabetes
    pub diabetes_pct: f64,
    /// Percentage with prediabetes
    pub prediabetes_pct: f64,
    /// Percentage with a risk score at or above the high-risk threshold
    pub high_risk_pct: f64,
}

/// One unit-width bin of the risk-score histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistogramBin {
    /// Floor of the risk score
    pub bucket: i64,
    /// Records in the bin
    pub count: usize,
}

/// Population prevalence of one primary condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionPrevalence {
    /// Condition
    pub condition: ConditionKind,
    /// Display name
    pub name: &'static str,
    /// Percentage of the population with the condition
    pub pct: f64,
}

/// Compute headline population figures
#[must_use]
pub fn summary_statistics(records: &[HealthRecord]) -> SummaryStatistics {
    let total = records.len();
    let mut diabetes_count = 0;
    let mut prediabetes_count = 0;
    let mut high_risk_count = 0;

    for record in records {
        match record.diabetes_status() {
            DiabetesStatus::Diabetes => diabetes_count += 1,
            DiabetesStatus::Prediabetes => prediabetes_count += 1,
            DiabetesStatus::None => {}
        }
        if record.risk_score() >= HIGH_RISK_THRESHOLD {
            high_risk_count += 1;
        }
    }

    SummaryStatistics {
        total,
        diabetes_count,
        diabetes_pct: percentage(diabetes_count, total),
        prediabetes_pct: percentage(prediabetes_count, total),
        high_risk_pct: percentage(high_risk_count, total),
    }
}

/// Bucket risk scores into unit-width bins, ascending
#[must_use]
pub fn risk_histogram(records: &[HealthRecord]) -> Vec<HistogramBin> {
    let mut counts: FxHashMap<i64, usize> = FxHashMap::default();
    for record in records {
        *counts.entry(record.risk_score().floor() as i64).or_insert(0) += 1;
    }

    let mut bins: Vec<HistogramBin> = counts
        .into_iter()
        .map(|(bucket, count)| HistogramBin { bucket, count })
        .collect();
    bins.sort_unstable_by_key(|bin| bin.bucket);
    bins
}

/// Prevalence of each primary condition, in display order
#[must_use]
pub fn condition_prevalence(records: &[HealthRecord]) -> Vec<ConditionPrevalence> {
    ConditionKind::PRIMARY
        .iter()
        .map(|&condition| {
            let count = records
                .iter()
                .filter(|r| r.attributes().has_condition(condition))
                .count();
            ConditionPrevalence {
                condition,
                name: condition.display_name(),
                pct: percentage(count, records.len()),
            }
        })
        .collect()
}

/// Largest risk score in the population, 0 when empty
#[must_use]
pub fn max_risk_score(records: &[HealthRecord]) -> f64 {
    records
        .iter()
        .map(HealthRecord::risk_score)
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Upper bound of the risk axis on the scatter view
#[must_use]
pub fn scatter_axis_max(records: &[HealthRecord]) -> f64 {
    max_risk_score(records) + 1.0
}

/// Every cohort aggregate, computed once after load
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortReport {
    /// Headline figures
    pub summary: SummaryStatistics,
    /// Risk-score histogram
    pub histogram: Vec<HistogramBin>,
    /// Condition prevalence
    pub prevalence: Vec<ConditionPrevalence>,
    /// Age by outcome cross-tabulation
    pub age_outcomes: Vec<AgeOutcomeRow>,
    /// Largest risk score, for chart axes
    pub max_risk_score: f64,
}

impl CohortReport {
    /// Aggregate a dataset snapshot
    #[must_use]
    pub fn compute(records: &[HealthRecord]) -> Self {
        let report = Self {
            summary: summary_statistics(records),
            histogram: risk_histogram(records),
            prevalence: condition_prevalence(records),
            age_outcomes: age_outcome_breakdown(records),
            max_risk_score: max_risk_score(records),
        };
        debug!(
            "Computed cohort report: {} records, {} histogram bins, {} age groups",
            report.summary.total,
            report.histogram.len(),
            report.age_outcomes.len()
        );
        report
    }

    /// Render the report as pretty-printed JSON
    ///
    /// # Errors
    /// Returns `Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CohortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Population Summary:")?;
        writeln!(f, "  Total Records: {}", self.summary.total)?;
        writeln!(f, "  Diabetes: {:.1}%", self.summary.diabetes_pct)?;
        writeln!(f, "  Prediabetes: {:.1}%", self.summary.prediabetes_pct)?;
        writeln!(f, "  High Risk (score >= {HIGH_RISK_THRESHOLD}): {:.1}%", self.summary.high_risk_pct)?;

        writeln!(f, "\nRisk Score Distribution:")?;
        for bin in &self.histogram {
            writeln!(f, "  {:>3}: {}", bin.bucket, bin.count)?;
        }

        writeln!(f, "\nCondition Prevalence:")?;
        for item in &self.prevalence {
            writeln!(f, "  {:<20} {:>5.1}%", item.name, item.pct)?;
        }

        writeln!(f, "\nDiabetes Status by Age Group:")?;
        for row in &self.age_outcomes {
            writeln!(
                f,
                "  {:<12} none {:>7}  pre {:>6}  diabetes {:>6}  total {:>7}",
                row.label, row.none, row.pre, row.diabetes, row.total
            )?;
        }
        Ok(())
    }
}
