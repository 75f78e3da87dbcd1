//! Normalized survey record
//!
//! A `HealthRecord` is built once from `RecordAttributes` and never changes
//! afterwards. The derived fields (representative age, risk score, risk
//! factor count and health burden) are computed at construction.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::algorithm::risk::{self, RiskLevel};
use crate::models::traits::RiskProfile;
use crate::models::types::{age_bracket_label, age_for_bracket, general_health_label};
use crate::models::{ConditionKind, DiabetesStatus, Gender};

/// Health burden above this many unwell days is highlighted
pub const HIGH_HEALTH_BURDEN_DAYS: i32 = 10;

/// Records with at least this many risk factors are highlighted
pub const MULTI_MORBID_RISK_FACTORS: u8 = 4;

/// Sequential record identifier
///
/// For file data this is the zero-based source row index, so identifiers
/// are unique but may have gaps where rows were rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source attributes of one respondent, before derivation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RecordAttributes {
    /// Diabetes outcome
    pub diabetes_status: DiabetesStatus,
    /// Survey age code (1-13)
    pub age_bracket: i32,
    /// Body-mass index
    pub bmi: f64,
    /// Respondent gender
    pub gender: Gender,
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
    /// Heavy alcohol consumption
    pub heavy_alcohol: bool,
    /// Serious difficulty walking or climbing stairs
    pub difficulty_walking: bool,
    /// Eats fruit at least once per day
    pub eats_fruit: bool,
    /// Eats vegetables at least once per day
    pub eats_veggies: bool,
    /// Self-reported general health, 1 (excellent) to 5 (poor)
    pub general_health: i32,
    /// Days of poor mental health in the past 30
    pub mental_health_days: i32,
    /// Days of poor physical health in the past 30
    pub physical_health_days: i32,
}

impl Default for RecordAttributes {
    fn default() -> Self {
        Self {
            diabetes_status: DiabetesStatus::None,
            age_bracket: 0,
            bmi: 25.0,
            gender: Gender::Female,
            high_blood_pressure: false,
            high_cholesterol: false,
            smoker: false,
            no_exercise: false,
            heart_disease: false,
            stroke: false,
            heavy_alcohol: false,
            difficulty_walking: false,
            eats_fruit: false,
            eats_veggies: false,
            general_health: 3,
            mental_health_days: 0,
            physical_health_days: 0,
        }
    }
}

impl RecordAttributes {
    /// Whether the given condition flag is set
    #[must_use]
    pub const fn has_condition(&self, condition: ConditionKind) -> bool {
        match condition {
            ConditionKind::HighBloodPressure => self.high_blood_pressure,
            ConditionKind::HighCholesterol => self.high_cholesterol,
            ConditionKind::Smoker => self.smoker,
            ConditionKind::NoExercise => self.no_exercise,
            ConditionKind::HeartDisease => self.heart_disease,
            ConditionKind::Stroke => self.stroke,
            ConditionKind::HeavyAlcohol => self.heavy_alcohol,
        }
    }
}

impl RiskProfile for RecordAttributes {
    fn age(&self) -> f64 {
        f64::from(age_for_bracket(self.age_bracket))
    }

    fn bmi(&self) -> f64 {
        self.bmi
    }

    fn gender(&self) -> Option<Gender> {
        Some(self.gender)
    }

    fn has_condition(&self, condition: ConditionKind) -> bool {
        Self::has_condition(self, condition)
    }
}

/// One respondent's normalized and scored survey profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthRecord {
    id: RecordId,
    #[serde(flatten)]
    attributes: RecordAttributes,
    age: u32,
    risk_score: f64,
    risk_factor_count: u8,
    health_burden_days: i32,
}

impl HealthRecord {
    /// Build a record, computing every derived field
    #[must_use]
    pub fn new(id: RecordId, attributes: RecordAttributes) -> Self {
        let risk_factor_count = ConditionKind::RISK_FACTORS
            .iter()
            .filter(|c| attributes.has_condition(**c))
            .count() as u8;

        Self {
            id,
            age: age_for_bracket(attributes.age_bracket),
            risk_score: risk::score(&attributes),
            risk_factor_count,
            health_burden_days: attributes
                .mental_health_days
                .max(attributes.physical_health_days),
            attributes,
        }
    }

    /// Record identifier
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Source attributes
    #[must_use]
    pub const fn attributes(&self) -> &RecordAttributes {
        &self.attributes
    }

    /// Diabetes outcome
    #[must_use]
    pub const fn diabetes_status(&self) -> DiabetesStatus {
        self.attributes.diabetes_status
    }

    /// Representative age for the record's bracket
    #[must_use]
    pub const fn age(&self) -> u32 {
        self.age
    }

    /// Survey age code
    #[must_use]
    pub const fn age_bracket(&self) -> i32 {
        self.attributes.age_bracket
    }

    /// Label for the survey age code
    #[must_use]
    pub fn age_bracket_label(&self) -> &'static str {
        age_bracket_label(self.attributes.age_bracket)
    }

    /// Body-mass index
    #[must_use]
    pub const fn bmi(&self) -> f64 {
        self.attributes.bmi
    }

    /// Respondent gender
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.attributes.gender
    }

    /// Self-reported general health
    #[must_use]
    pub const fn general_health(&self) -> i32 {
        self.attributes.general_health
    }

    /// Label for the general health answer
    #[must_use]
    pub const fn general_health_label(&self) -> &'static str {
        general_health_label(self.attributes.general_health)
    }

    /// Composite risk score
    #[must_use]
    pub const fn risk_score(&self) -> f64 {
        self.risk_score
    }

    /// Risk level for the composite score
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }

    /// Number of the seven risk-factor conditions present
    #[must_use]
    pub const fn risk_factor_count(&self) -> u8 {
        self.risk_factor_count
    }

    /// Worst of mental and physical unwell days
    #[must_use]
    pub const fn health_burden_days(&self) -> i32 {
        self.health_burden_days
    }

    /// Whether the health burden exceeds the highlight threshold
    #[must_use]
    pub const fn has_high_health_burden(&self) -> bool {
        self.health_burden_days > HIGH_HEALTH_BURDEN_DAYS
    }

    /// Whether the record carries many concurrent risk factors
    #[must_use]
    pub const fn is_multi_morbid(&self) -> bool {
        self.risk_factor_count >= MULTI_MORBID_RISK_FACTORS
    }

    /// Primary conditions present on this record, in display order
    #[must_use]
    pub fn active_conditions(&self) -> SmallVec<[ConditionKind; 7]> {
        ConditionKind::PRIMARY
            .iter()
            .copied()
            .filter(|c| self.attributes.has_condition(*c))
            .collect()
    }
}

impl RiskProfile for HealthRecord {
    fn age(&self) -> f64 {
        f64::from(self.age)
    }

    fn bmi(&self) -> f64 {
        self.attributes.bmi
    }

    fn gender(&self) -> Option<Gender> {
        Some(self.attributes.gender)
    }

    fn has_condition(&self, condition: ConditionKind) -> bool {
        self.attributes.has_condition(condition)
    }
}
