//! Interactive "what-if" profile

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskEngineError};
use crate::models::traits::RiskProfile;
use crate::models::{ConditionKind, Gender};

/// The user-adjustable scenario behind the personal risk calculator
///
/// Carries no gender, so the gender offset never applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in years
    pub age: f64,
    /// Body-mass index
    pub bmi: f64,
    /// High blood pressure
    pub high_blood_pressure: bool,
    /// High cholesterol
    pub high_cholesterol: bool,
    /// Smoker
    pub smoker: bool,
    /// No physical activity
    pub no_exercise: bool,
    /// Heart disease or attack
    pub heart_disease: bool,
    /// Stroke
    pub stroke: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 50.0,
            bmi: 25.0,
            high_blood_pressure: false,
            high_cholesterol: false,
            smoker: false,
            no_exercise: false,
            heart_disease: false,
            stroke: false,
        }
    }
}

impl UserProfile {
    /// Create a profile with the startup defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a condition flag
    ///
    /// # Errors
    /// Returns `UnsupportedCondition` for conditions that are not part of
    /// the interactive profile.
    pub fn set_condition(&mut self, condition: ConditionKind, present: bool) -> Result<()> {
        let flag = match condition {
            ConditionKind::HighBloodPressure => &mut self.high_blood_pressure,
            ConditionKind::HighCholesterol => &mut self.high_cholesterol,
            ConditionKind::Smoker => &mut self.smoker,
            ConditionKind::NoExercise => &mut self.no_exercise,
            ConditionKind::HeartDisease => &mut self.heart_disease,
            ConditionKind::Stroke => &mut self.stroke,
            ConditionKind::HeavyAlcohol => {
                return Err(RiskEngineError::UnsupportedCondition(condition));
            }
        };
        *flag = present;
        Ok(())
    }

    /// Builder-style condition toggle for fixed scenarios
    #[must_use]
    pub fn with_condition(mut self, condition: ConditionKind) -> Self {
        if self.set_condition(condition, true).is_err() {
            log::warn!("Ignoring {condition}: not part of the interactive profile");
        }
        self
    }
}

impl RiskProfile for UserProfile {
    fn age(&self) -> f64 {
        self.age
    }

    fn bmi(&self) -> f64 {
        self.bmi
    }

    fn gender(&self) -> Option<Gender> {
        None
    }

    fn has_condition(&self, condition: ConditionKind) -> bool {
        match condition {
            ConditionKind::HighBloodPressure => self.high_blood_pressure,
            ConditionKind::HighCholesterol => self.high_cholesterol,
            ConditionKind::Smoker => self.smoker,
            ConditionKind::NoExercise => self.no_exercise,
            ConditionKind::HeartDisease => self.heart_disease,
            ConditionKind::Stroke => self.stroke,
            ConditionKind::HeavyAlcohol => false,
        }
    }
}
