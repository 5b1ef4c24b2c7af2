//! Volatility of period-over-period returns

use crate::data::Series;
use seasonal_math::{population_std_dev, relative_returns};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Volatility above this percentage is high
pub const HIGH_THRESHOLD: f64 = 20.0;
/// Volatility above this percentage is medium
pub const MEDIUM_THRESHOLD: f64 = 10.0;

/// Volatility classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityLevel {
    Low,
    Medium,
    High,
}

impl VolatilityLevel {
    /// Classify a volatility percentage
    pub fn classify(value: f64) -> Self {
        if value > HIGH_THRESHOLD {
            VolatilityLevel::High
        } else if value > MEDIUM_THRESHOLD {
            VolatilityLevel::Medium
        } else {
            VolatilityLevel::Low
        }
    }

    /// Fixed description for the level
    pub fn description(&self) -> &'static str {
        match self {
            VolatilityLevel::High => {
                "High volatility - sales fluctuate significantly between periods"
            }
            VolatilityLevel::Medium => {
                "Moderate volatility - some fluctuation in sales between periods"
            }
            VolatilityLevel::Low => "Low volatility - sales are stable between periods",
        }
    }
}

impl fmt::Display for VolatilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VolatilityLevel::Low => "low",
            VolatilityLevel::Medium => "medium",
            VolatilityLevel::High => "high",
        };
        f.write_str(label)
    }
}

/// Volatility percentage with its classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolatilityReport {
    /// Standard deviation of relative returns, as a percentage
    pub value: f64,
    pub level: VolatilityLevel,
    pub description: String,
}

impl VolatilityReport {
    fn from_value(value: f64) -> Self {
        let level = VolatilityLevel::classify(value);
        Self {
            value,
            level,
            description: level.description().to_string(),
        }
    }
}

/// Dispersion of relative returns, as a percentage, classified low/medium/high
///
/// Fewer than two observations report zero (low). Returns from a zero base are
/// skipped.
pub fn volatility(series: &Series) -> VolatilityReport {
    if series.len() < 2 {
        return VolatilityReport::from_value(0.0);
    }

    let returns = relative_returns(&series.values());
    let value = population_std_dev(&returns).unwrap_or(0.0) * 100.0;

    VolatilityReport::from_value(value)
}
