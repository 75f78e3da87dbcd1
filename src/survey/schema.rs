//! Survey column definitions

use std::fmt;

/// Columns of the survey table consumed by the normalizer
///
/// Columns not listed here (`CholCheck`, `AnyHealthcare`, `Education`,
/// `Income`, ...) are ignored when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SurveyField {
    /// Diabetes outcome: 0 none, 1 prediabetes, 2 diabetes
    Diabetes,
    /// High blood pressure indicator
    HighBp,
    /// High cholesterol indicator
    HighChol,
    /// Body-mass index
    Bmi,
    /// Smoker indicator
    Smoker,
    /// Stroke indicator
    Stroke,
    /// Coronary heart disease or myocardial infarction indicator
    HeartDisease,
    /// Physical activity in the past 30 days indicator
    PhysActivity,
    /// Daily fruit indicator
    Fruits,
    /// Daily vegetable indicator
    Veggies,
    /// Heavy alcohol consumption indicator
    HeavyAlcohol,
    /// General health, 1-5
    GeneralHealth,
    /// Poor mental health days, 0-30
    MentalHealth,
    /// Poor physical health days, 0-30
    PhysicalHealth,
    /// Difficulty walking indicator
    DiffWalk,
    /// Sex code, 1 is male
    Sex,
    /// Age bracket code, 1-13
    Age,
}

impl SurveyField {
    /// Every consumed column
    pub const ALL: [Self; 17] = [
        Self::Diabetes,
        Self::HighBp,
        Self::HighChol,
        Self::Bmi,
        Self::Smoker,
        Self::Stroke,
        Self::HeartDisease,
        Self::PhysActivity,
        Self::Fruits,
        Self::Veggies,
        Self::HeavyAlcohol,
        Self::GeneralHealth,
        Self::MentalHealth,
        Self::PhysicalHealth,
        Self::DiffWalk,
        Self::Sex,
        Self::Age,
    ];

    /// Column name in the survey file
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes_012",
            Self::HighBp => "HighBP",
            Self::HighChol => "HighChol",
            Self::Bmi => "BMI",
            Self::Smoker => "Smoker",
            Self::Stroke => "Stroke",
            Self::HeartDisease => "HeartDiseaseorAttack",
            Self::PhysActivity => "PhysActivity",
            Self::Fruits => "Fruits",
            Self::Veggies => "Veggies",
            Self::HeavyAlcohol => "HvyAlcoholConsump",
            Self::GeneralHealth => "GenHlth",
            Self::MentalHealth => "MentHlth",
            Self::PhysicalHealth => "PhysHlth",
            Self::DiffWalk => "DiffWalk",
            Self::Sex => "Sex",
            Self::Age => "Age",
        }
    }

    /// Look up a field by its column name
    #[must_use]
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|f| f.column_name() == name)
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
