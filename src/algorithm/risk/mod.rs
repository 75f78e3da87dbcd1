//! Composite diabetes risk scoring
//!
//! A fixed weighted sum over age, BMI and the primary conditions, rounded
//! to one decimal, plus the four-band level classification.

pub mod level;
pub mod score;

pub use level::{HIGH_RISK_THRESHOLD, RiskLevel, risk_gauge_pct};
pub use score::{ProfileScore, bmi_term, round_half_up, score, score_profile};
