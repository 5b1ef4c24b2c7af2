//! Additive seasonal decomposition
//!
//! Splits a series into a moving-average trend, a 12-slot calendar-month
//! seasonal index and the irregular residual left after removing both.

use crate::data::Series;
use crate::error::Result;
use seasonal_math::{centered_moving_average, population_variance};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of seasonal slots, one per calendar month
pub const SEASONS: usize = 12;

/// Trend, seasonal and irregular components of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalProfile {
    /// Last point of the moving-average trend curve, used as the forecast rate
    pub trend: f64,
    /// Additive deviation from trend per calendar month (index 0 = January)
    pub seasonal: [f64; SEASONS],
    /// Residual per observation, parallel to the input series
    pub irregular: Vec<f64>,
    /// Share of total variance explained by the seasonal index, in [0, 1]
    pub seasonal_strength: f64,
}

impl SeasonalProfile {
    /// Seasonal deviation for a 1-based calendar month, 0 when out of range
    pub fn seasonal_for_month(&self, month: u32) -> f64 {
        (month as usize)
            .checked_sub(1)
            .and_then(|i| self.seasonal.get(i))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Moving-average window for a series of `len` observations
pub fn trend_window(len: usize) -> usize {
    (len / 2).min(SEASONS).max(1)
}

/// The forecast anchor rate: the final point of the trend curve.
///
/// Only this scalar is handed to the forecast stage, not the curve itself.
pub fn trend_anchor(trend_curve: &[f64]) -> f64 {
    trend_curve.last().copied().unwrap_or(0.0)
}

/// Decompose a series into trend, seasonal and irregular components
///
/// Short series (fewer than 12 observations) are accepted; months without
/// observations keep a seasonal index of zero.
pub fn decompose(series: &Series) -> Result<SeasonalProfile> {
    let values = series.values();
    if values.is_empty() {
        return Ok(SeasonalProfile {
            trend: 0.0,
            seasonal: [0.0; SEASONS],
            irregular: Vec::new(),
            seasonal_strength: 0.0,
        });
    }

    let window = trend_window(values.len());
    let trend_curve = centered_moving_average(&values, window)?;

    let mut sums = [0.0; SEASONS];
    let mut counts = [0usize; SEASONS];
    for (observation, trend) in series.iter().zip(&trend_curve) {
        if let Some(slot) = season_slot(observation.month) {
            sums[slot] += observation.value - trend;
            counts[slot] += 1;
        }
    }

    let mut seasonal = [0.0; SEASONS];
    for slot in 0..SEASONS {
        if counts[slot] > 0 {
            seasonal[slot] = sums[slot] / counts[slot] as f64;
        }
    }

    let irregular = series
        .iter()
        .zip(&trend_curve)
        .map(|(observation, trend)| {
            let season = season_slot(observation.month)
                .map(|slot| seasonal[slot])
                .unwrap_or(0.0);
            observation.value - trend - season
        })
        .collect();

    let total_variance = population_variance(&values)?;
    let seasonal_strength = if total_variance > 0.0 {
        (population_variance(&seasonal)? / total_variance).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let trend = trend_anchor(&trend_curve);
    debug!(
        observations = values.len(),
        window, trend, seasonal_strength, "Decomposed series"
    );

    Ok(SeasonalProfile {
        trend,
        seasonal,
        irregular,
        seasonal_strength,
    })
}

fn season_slot(month: u32) -> Option<usize> {
    match month {
        1..=12 => Some(month as usize - 1),
        _ => None,
    }
}
