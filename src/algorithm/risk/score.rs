//! Risk score formula

use serde::Serialize;

use crate::algorithm::risk::RiskLevel;
use crate::models::{ConditionKind, Gender, RiskProfile};

/// Age at which the age term is zero
const AGE_OFFSET: f64 = 18.0;
/// Years of age per score point
const AGE_DIVISOR: f64 = 25.0;
/// Score added for obesity (BMI above 30)
const OBESE_WEIGHT: f64 = 2.5;
/// Score added for overweight (BMI above 25, up to 30)
const OVERWEIGHT_WEIGHT: f64 = 1.2;
/// Score added for male respondents
const MALE_WEIGHT: f64 = 0.2;

/// Score and level for a single profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileScore {
    /// Rounded composite score
    pub score: f64,
    /// Level band for the score
    pub level: RiskLevel,
}

/// BMI contribution to the score
#[must_use]
pub fn bmi_term(bmi: f64) -> f64 {
    if bmi > 30.0 {
        OBESE_WEIGHT
    } else if bmi > 25.0 {
        OVERWEIGHT_WEIGHT
    } else {
        0.0
    }
}

/// Round to one decimal place, halves rounding towards positive infinity
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Compute the composite risk score for a profile
///
/// Pure and total: out-of-range inputs (negative age, zero BMI) simply
/// extrapolate the formula.
#[must_use]
pub fn score<P: RiskProfile + ?Sized>(profile: &P) -> f64 {
    let conditions: f64 = ConditionKind::PRIMARY
        .iter()
        .filter(|c| profile.has_condition(**c))
        .map(|c| c.score_weight())
        .sum();

    let gender = match profile.gender() {
        Some(Gender::Male) => MALE_WEIGHT,
        _ => 0.0,
    };

    let raw = (profile.age() - AGE_OFFSET) / AGE_DIVISOR + bmi_term(profile.bmi()) + conditions + gender;
    round_half_up(raw)
}

/// Score a profile and classify the result
#[must_use]
pub fn score_profile<P: RiskProfile + ?Sized>(profile: &P) -> ProfileScore {
    let score = score(profile);
    ProfileScore {
        score,
        level: RiskLevel::from_score(score),
    }
}
