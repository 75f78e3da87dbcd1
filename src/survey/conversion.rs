//! Conversion of raw survey rows into normalized records
//!
//! Indicator columns are strictly compared against 1: only a value equal
//! to exactly 1 is true, anything else (0, 2, -1, 0.5) is false. Rows with
//! an absent or non-numeric required column are rejected rather than
//! admitted with NaN fields.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{Result, RiskEngineError};
use crate::models::{DiabetesStatus, Gender, HealthRecord, RecordAttributes, RecordId};
use crate::survey::{RawRow, SurveyField};
use crate::utils::logging::{create_main_progress_bar, finish_progress_bar};

/// Bracket stored for age codes that cannot be looked up
const UNMAPPED_AGE_BRACKET: i32 = 0;

/// Outcome of normalizing a table of raw rows
#[derive(Debug, Clone, Default)]
pub struct NormalizedRows {
    /// Accepted records in source order
    pub records: Vec<HealthRecord>,
    /// Number of rejected rows
    pub skipped: usize,
}

fn numeric(row: &RawRow, field: SurveyField) -> Result<f64> {
    let raw = row.get(field).ok_or(RiskEngineError::MissingField(field))?;
    let value = raw.coerce();
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RiskEngineError::NonNumericField {
            field,
            value: raw.to_string(),
        })
    }
}

fn indicator(row: &RawRow, field: SurveyField) -> Result<bool> {
    Ok(numeric(row, field)? == 1.0)
}

fn integer(row: &RawRow, field: SurveyField) -> Result<i32> {
    let value = numeric(row, field)?;
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return Err(RiskEngineError::InvalidField { field, value });
    }
    Ok(value as i32)
}

/// Age bracket code; fractional codes fall outside the lookup table
fn age_bracket(row: &RawRow) -> Result<i32> {
    match integer(row, SurveyField::Age) {
        Err(RiskEngineError::InvalidField { .. }) => Ok(UNMAPPED_AGE_BRACKET),
        other => other,
    }
}

/// Normalize a single survey row
///
/// # Errors
/// `MissingField` or `NonNumericField` when a required column is absent or
/// does not coerce to a finite number, `InvalidField` when the diabetes
/// code is not 0, 1 or 2 or a health-day count is not a whole number.
/// A fractional age code is kept as an unmapped bracket.
pub fn normalize_row(row: &RawRow, id: RecordId) -> Result<HealthRecord> {
    let diabetes_code = numeric(row, SurveyField::Diabetes)?;
    let diabetes_status =
        DiabetesStatus::from_code(diabetes_code).ok_or(RiskEngineError::InvalidField {
            field: SurveyField::Diabetes,
            value: diabetes_code,
        })?;

    let attributes = RecordAttributes {
        diabetes_status,
        age_bracket: age_bracket(row)?,
        bmi: numeric(row, SurveyField::Bmi)?,
        gender: Gender::from_sex_code(numeric(row, SurveyField::Sex)?),
        high_blood_pressure: indicator(row, SurveyField::HighBp)?,
        high_cholesterol: indicator(row, SurveyField::HighChol)?,
        smoker: indicator(row, SurveyField::Smoker)?,
        no_exercise: numeric(row, SurveyField::PhysActivity)? == 0.0,
        heart_disease: indicator(row, SurveyField::HeartDisease)?,
        stroke: indicator(row, SurveyField::Stroke)?,
        heavy_alcohol: indicator(row, SurveyField::HeavyAlcohol)?,
        difficulty_walking: indicator(row, SurveyField::DiffWalk)?,
        eats_fruit: indicator(row, SurveyField::Fruits)?,
        eats_veggies: indicator(row, SurveyField::Veggies)?,
        general_health: integer(row, SurveyField::GeneralHealth)?,
        mental_health_days: integer(row, SurveyField::MentalHealth)?,
        physical_health_days: integer(row, SurveyField::PhysicalHealth)?,
    };

    Ok(HealthRecord::new(id, attributes))
}

/// Normalize a whole table, dropping and counting rejected rows
///
/// Rows are processed in parallel; the accepted records keep source order
/// and their identifiers are the source row indices.
pub fn normalize_rows(rows: &[RawRow], show_progress: bool) -> NormalizedRows {
    let progress = show_progress
        .then(|| create_main_progress_bar(rows.len() as u64, Some("Normalizing survey rows")));

    let results: Vec<Result<HealthRecord>> = rows
        .par_iter()
        .enumerate()
        .map(|(index, row)| {
            let id = RecordId(u32::try_from(index).unwrap_or(u32::MAX));
            let result = normalize_row(row, id);
            if let Some(pb) = &progress {
                pb.inc(1);
            }
            result
        })
        .collect();

    if let Some(pb) = &progress {
        finish_progress_bar(pb, "Normalization complete");
    }

    let mut normalized = NormalizedRows {
        records: Vec::with_capacity(results.len()),
        skipped: 0,
    };
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(record) => normalized.records.push(record),
            Err(e) => {
                debug!("Skipping row {index}: {e}");
                normalized.skipped += 1;
            }
        }
    }

    if normalized.skipped > 0 {
        warn!(
            "Skipped {} malformed rows out of {}",
            normalized.skipped,
            rows.len()
        );
    }
    info!("Normalized {} records", normalized.records.len());
    normalized
}
