//! Similarity criteria for profile matching
//!
//! A record matches a profile when it falls inside every tolerance window
//! (strict inequalities) around the profile's score, age and BMI.

use std::fmt;

use crate::models::HealthRecord;

/// Tolerance windows for the similar-profile cohort
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityCriteria {
    /// Maximum risk score difference (exclusive)
    pub score_window: f64,
    /// Maximum age difference in years (exclusive)
    pub age_window: f64,
    /// Maximum BMI difference (exclusive)
    pub bmi_window: f64,
}

impl Default for SimilarityCriteria {
    fn default() -> Self {
        Self {
            score_window: 0.5,
            age_window: 10.0,
            bmi_window: 3.0,
        }
    }
}

impl SimilarityCriteria {
    /// Create criteria with the default windows
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the score window
    #[must_use]
    pub const fn with_score_window(mut self, window: f64) -> Self {
        self.score_window = window;
        self
    }

    /// Override the age window
    #[must_use]
    pub const fn with_age_window(mut self, window: f64) -> Self {
        self.age_window = window;
        self
    }

    /// Override the BMI window
    #[must_use]
    pub const fn with_bmi_window(mut self, window: f64) -> Self {
        self.bmi_window = window;
        self
    }

    /// Check a record against an already-scored target
    ///
    /// # Arguments
    ///
    /// * `record` - Candidate record
    /// * `score` - Risk score of the target profile
    /// * `age` - Age of the target profile
    /// * `bmi` - BMI of the target profile
    #[must_use]
    pub fn is_match(&self, record: &HealthRecord, score: f64, age: f64, bmi: f64) -> bool {
        (record.risk_score() - score).abs() < self.score_window
            && (f64::from(record.age()) - age).abs() < self.age_window
            && (record.bmi() - bmi).abs() < self.bmi_window
    }
}

impl fmt::Display for SimilarityCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Similarity Criteria: score ±{}, age ±{} years, BMI ±{}",
            self.score_window, self.age_window, self.bmi_window
        )
    }
}
