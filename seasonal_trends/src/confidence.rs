//! Confidence bands around forecast points

use crate::data::Series;
use crate::forecast::ForecastPoint;
use chrono::NaiveDate;
use seasonal_math::population_std_dev;
use serde::{Deserialize, Serialize};

/// Normal-interval multiplier for ~95% coverage
pub const Z_SCORE: f64 = 1.96;
/// Confidence never decays below this factor
pub const MIN_CONFIDENCE: f64 = 0.5;
/// Total decay applied across the horizon before flooring
pub const CONFIDENCE_DECAY: f64 = 0.8;

/// Uncertainty bounds for one forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceBand {
    pub date: NaiveDate,
    pub lower: f64,
    pub upper: f64,
    /// In (0, 1], non-increasing with distance from the last observation
    pub confidence: f64,
}

/// Confidence factor for the 0-based step `index` of a `horizon`-long forecast
pub fn confidence_factor(index: usize, horizon: usize) -> f64 {
    if horizon == 0 {
        return 1.0;
    }
    (1.0 - (index as f64 / horizon as f64) * CONFIDENCE_DECAY).max(MIN_CONFIDENCE)
}

/// Bands around each forecast point, scaled by historical dispersion
///
/// The margin is `stdDev(history) * factor * 1.96`, so it shrinks along with
/// the confidence factor as the forecast moves away from the history.
pub fn confidence_intervals(
    forecast_points: &[ForecastPoint],
    historical: &Series,
) -> Vec<ConfidenceBand> {
    let std_dev = population_std_dev(&historical.values()).unwrap_or(0.0);
    let horizon = forecast_points.len();

    forecast_points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let confidence = confidence_factor(i, horizon);
            let margin = std_dev * confidence * Z_SCORE;
            ConfidenceBand {
                date: point.date(),
                lower: (point.value() - margin).round().max(0.0),
                upper: (point.value() + margin).round(),
                confidence,
            }
        })
        .collect()
}
