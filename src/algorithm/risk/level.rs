//! Risk level classification
//!
//! Four non-overlapping, left-inclusive bands over the risk score.

use std::fmt;

use serde::Serialize;

/// Scores at or above this value count as high risk in population statistics
pub const HIGH_RISK_THRESHOLD: f64 = 4.0;

/// Score that fills the personal risk gauge
const GAUGE_FULL_SCORE: f64 = 8.0;

/// Risk level bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Score below 2
    Low,
    /// Score in [2, 4)
    Moderate,
    /// Score in [4, 6)
    High,
    /// Score of 6 or more
    Severe,
}

impl RiskLevel {
    /// Classify a score; boundary values belong to the higher band
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 2.0 {
            Self::Low
        } else if score < HIGH_RISK_THRESHOLD {
            Self::Moderate
        } else if score < 6.0 {
            Self::High
        } else {
            Self::Severe
        }
    }

    /// Short machine name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }

    /// Label shown on the risk calculator
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
            Self::Severe => "Very High Risk",
        }
    }

    /// Display colour as a hex string
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#2ECC71",
            Self::Moderate => "#F39C12",
            Self::High => "#E67E22",
            Self::Severe => "#E74C3C",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fill percentage of the personal risk gauge, clamped to [0, 100]
#[must_use]
pub fn risk_gauge_pct(score: f64) -> f64 {
    (score / GAUGE_FULL_SCORE * 100.0).clamp(0.0, 100.0)
}
