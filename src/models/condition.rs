//! Health condition kinds
//!
//! The enumerated conditions that feed the risk score, the risk factor
//! count and the prevalence chart.

use std::fmt;

use serde::Serialize;

/// A yes/no health condition tracked per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Doctor-diagnosed high blood pressure
    HighBloodPressure,
    /// Doctor-diagnosed high cholesterol
    HighCholesterol,
    /// Smoked at least 100 cigarettes
    Smoker,
    /// No physical activity in the past 30 days
    NoExercise,
    /// Coronary heart disease or myocardial infarction
    HeartDisease,
    /// Ever had a stroke
    Stroke,
    /// Heavy drinker
    HeavyAlcohol,
}

impl ConditionKind {
    /// Conditions exposed on the interactive profile, in display order
    pub const PRIMARY: [Self; 6] = [
        Self::HighBloodPressure,
        Self::HighCholesterol,
        Self::Smoker,
        Self::NoExercise,
        Self::HeartDisease,
        Self::Stroke,
    ];

    /// Conditions counted by `risk_factor_count`
    pub const RISK_FACTORS: [Self; 7] = [
        Self::HighBloodPressure,
        Self::HighCholesterol,
        Self::Smoker,
        Self::Stroke,
        Self::HeartDisease,
        Self::HeavyAlcohol,
        Self::NoExercise,
    ];

    /// Get the display name for this condition
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HighBloodPressure => "High Blood Pressure",
            Self::HighCholesterol => "High Cholesterol",
            Self::Smoker => "Smoker",
            Self::NoExercise => "No Exercise",
            Self::HeartDisease => "Heart Disease",
            Self::Stroke => "Stroke",
            Self::HeavyAlcohol => "Heavy Alcohol",
        }
    }

    /// Weight added to the risk score when the condition is present
    #[must_use]
    pub const fn score_weight(self) -> f64 {
        match self {
            Self::HighBloodPressure => 1.8,
            Self::HighCholesterol => 1.2,
            Self::Smoker => 1.5,
            Self::NoExercise => 0.8,
            Self::HeartDisease => 2.0,
            Self::Stroke => 1.5,
            Self::HeavyAlcohol => 0.0,
        }
    }

    /// Whether the condition can be toggled on the interactive profile
    #[must_use]
    pub fn is_primary(self) -> bool {
        Self::PRIMARY.contains(&self)
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
