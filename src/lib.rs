//! Diabetes risk scoring and cohort analysis over the BRFSS 2015 health
//! indicators survey.
//!
//! Survey rows are normalized into scored records, aggregated into
//! population statistics once at load, and queried for profiles similar to
//! an interactive what-if scenario.

pub mod algorithm;
pub mod async_io;
pub mod collections;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod survey;
pub mod utils;

// Core types
pub use collections::HealthDataset;
pub use config::{EngineConfig, LoaderConfig};
pub use error::{Result, RiskEngineError};
pub use models::{
    ConditionKind, DiabetesStatus, Gender, HealthRecord, RecordAttributes, RecordId, RiskProfile,
    UserProfile,
};
pub use session::{DashboardSession, RiskAssessment, RiskObserver};

// Algorithms
pub use algorithm::cohort::{CohortReport, SummaryStatistics};
pub use algorithm::risk::{ProfileScore, RiskLevel, score, score_profile};
pub use algorithm::sampling::{DisplayView, SampleCaps, SampleMode, Sampler};
pub use algorithm::similarity::{CohortQuery, LinearScan, SimilarCohort, SimilarityCriteria};

// Ingestion
pub use async_io::{DataSource, LoadOutcome, LoadReport, load_dataset};
pub use survey::{RawRow, RawValue, SurveyField, SyntheticConfig, normalize_row, normalize_rows};
