//! Domain models for the diabetes health indicators survey
//!
//! Normalized records, the interactive profile and the categorical types
//! they share.

pub mod condition;
pub mod profile;
pub mod record;
pub mod traits;
pub mod types;

pub use condition::ConditionKind;
pub use profile::UserProfile;
pub use record::{HealthRecord, RecordAttributes, RecordId};
pub use traits::RiskProfile;
pub use types::{DiabetesStatus, Gender, age_bracket_label, age_for_bracket, general_health_label};
