//! Traits shared by records and profiles

use crate::models::{ConditionKind, Gender};

/// Anything the risk scorer can evaluate
///
/// Implemented by full survey records and by the partial interactive
/// profile. A `None` gender means the gender term is not part of the
/// profile and never contributes to the score.
pub trait RiskProfile {
    /// Age in years
    fn age(&self) -> f64;

    /// Body-mass index
    fn bmi(&self) -> f64;

    /// Gender, when the profile carries one
    fn gender(&self) -> Option<Gender>;

    /// Whether the given condition is present
    fn has_condition(&self, condition: ConditionKind) -> bool;
}
