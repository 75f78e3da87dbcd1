//! Common domain type definitions
//!
//! Categorical survey codes and the fixed lookup tables used when
//! normalizing survey rows.

use std::fmt;

use serde::Serialize;

/// Representative ages for survey age brackets 1 through 13
pub const AGE_BRACKET_MIDPOINTS: [u32; 13] = [21, 27, 32, 37, 42, 47, 52, 57, 62, 67, 72, 77, 82];

/// Age used for bracket codes outside the lookup table
pub const DEFAULT_AGE: u32 = 50;

const AGE_BRACKET_LABELS: [&str; 13] = [
    "18-24 years",
    "25-29 years",
    "30-34 years",
    "35-39 years",
    "40-44 years",
    "45-49 years",
    "50-54 years",
    "55-59 years",
    "60-64 years",
    "65-69 years",
    "70-74 years",
    "75-79 years",
    "80+ years",
];

fn bracket_index(code: i32) -> Option<usize> {
    usize::try_from(code)
        .ok()
        .filter(|c| (1..=AGE_BRACKET_MIDPOINTS.len()).contains(c))
        .map(|c| c - 1)
}

/// Map a survey age bracket code to its representative age
#[must_use]
pub fn age_for_bracket(code: i32) -> u32 {
    bracket_index(code).map_or(DEFAULT_AGE, |i| AGE_BRACKET_MIDPOINTS[i])
}

/// Human readable label for a survey age bracket code
#[must_use]
pub fn age_bracket_label(code: i32) -> &'static str {
    bracket_index(code).map_or("Unknown", |i| AGE_BRACKET_LABELS[i])
}

/// Label for the self-reported general health scale (1 = excellent, 5 = poor)
#[must_use]
pub const fn general_health_label(level: i32) -> &'static str {
    match level {
        1 => "Excellent",
        2 => "Very Good",
        3 => "Good",
        4 => "Fair",
        5 => "Poor",
        _ => "Unknown",
    }
}

/// Gender of a survey respondent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
}

impl Gender {
    /// Sex code 1 is male, every other value is female
    #[must_use]
    pub fn from_sex_code(code: f64) -> Self {
        if code == 1.0 { Self::Male } else { Self::Female }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Diabetes outcome as coded by the `Diabetes_012` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesStatus {
    /// No diabetes, or diabetes only during pregnancy
    None = 0,
    /// Prediabetes
    Prediabetes = 1,
    /// Diabetes
    Diabetes = 2,
}

impl DiabetesStatus {
    /// Convert a survey code (0, 1 or 2) to a status
    #[must_use]
    pub fn from_code(code: f64) -> Option<Self> {
        if code == 0.0 {
            Some(Self::None)
        } else if code == 1.0 {
            Some(Self::Prediabetes)
        } else if code == 2.0 {
            Some(Self::Diabetes)
        } else {
            None
        }
    }

    /// Survey code for this status
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Display name for this status
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "No Diabetes",
            Self::Prediabetes => "Prediabetes",
            Self::Diabetes => "Diabetes",
        }
    }
}

impl fmt::Display for DiabetesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
