//! Mapping a COI percentage onto the four presentation risk bands.

use std::fmt::{self, Display};

use serde::Serialize;

///
/// Ordinal risk band for a computed COI percentage
///
/// Bands are half-open on the lower bound: exactly 5.0 is [Moderate], not
/// [Low], and exactly 25.0 is [VeryHigh].
///
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    ///
    /// Classify a COI percentage: `< 5` low, `[5, 10)` moderate, `[10, 25)`
    /// high, `>= 25` very high
    ///
    pub fn classify(coi_percent: f64) -> RiskLevel {
        if coi_percent < 5.0 {
            RiskLevel::Low
        } else if coi_percent < 10.0 {
            RiskLevel::Moderate
        } else if coi_percent < 25.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very-high",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Recommended level of inbreeding",
            RiskLevel::Moderate => "High degree of line breeding",
            RiskLevel::High => "High degree of inbreeding",
            RiskLevel::VeryHigh => "Very high degree of inbreeding",
        }
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
