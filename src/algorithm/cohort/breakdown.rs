//! Age group by diabetes outcome cross-tabulation

use itertools::Itertools;
use serde::Serialize;

use crate::models::{DiabetesStatus, HealthRecord, age_bracket_label};

/// Outcome counts for one survey age bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeOutcomeRow {
    /// Survey age code
    pub age_bracket: i32,
    /// Bracket label
    pub label: &'static str,
    /// Records without diabetes
    pub none: usize,
    /// Records with prediabetes
    pub pre: usize,
    /// Records with diabetes
    pub diabetes: usize,
    /// All records in the bracket
    pub total: usize,
}

/// Group records by age bracket, ascending, with per-outcome counts
#[must_use]
pub fn age_outcome_breakdown(records: &[HealthRecord]) -> Vec<AgeOutcomeRow> {
    records
        .iter()
        .into_group_map_by(|r| r.age_bracket())
        .into_iter()
        .sorted_unstable_by_key(|(bracket, _)| *bracket)
        .map(|(age_bracket, group)| {
            let mut row = AgeOutcomeRow {
                age_bracket,
                label: age_bracket_label(age_bracket),
                none: 0,
                pre: 0,
                diabetes: 0,
                total: group.len(),
            };
            for record in group {
                match record.diabetes_status() {
                    DiabetesStatus::None => row.none += 1,
                    DiabetesStatus::Prediabetes => row.pre += 1,
                    DiabetesStatus::Diabetes => row.diabetes += 1,
                }
            }
            row
        })
        .collect()
}
