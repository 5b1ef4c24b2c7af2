//! Persistence + trend + seasonal forecast
//!
//! Each future day is projected from the last observed value, adding the
//! decomposition trend scaled as a per-30-day rate and the seasonal index of
//! the target month, then multiplied by a jitter factor.

use crate::data::{Observation, Series};
use crate::decomposition::SeasonalProfile;
use crate::error::{Result, TrendsError};
use chrono::{Datelike, Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Lower bound of the jitter factor
pub const JITTER_MIN: f64 = 0.9;
/// Upper bound of the jitter factor
pub const JITTER_MAX: f64 = 1.1;
/// Days over which the trend rate applies in full
pub const TREND_RATE_DAYS: f64 = 30.0;

/// A projected observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    #[serde(flatten)]
    pub observation: Observation,
    /// Always true, distinguishes projected points from history
    pub is_forecast: bool,
}

impl ForecastPoint {
    fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            observation: Observation::new(date, value),
            is_forecast: true,
        }
    }

    /// Projected value
    pub fn value(&self) -> f64 {
        self.observation.value
    }

    /// Projected date
    pub fn date(&self) -> NaiveDate {
        self.observation.date
    }
}

/// Source of the multiplicative jitter applied to each forecast step
pub trait JitterSource {
    /// Next jitter factor
    fn factor(&mut self) -> f64;
}

/// Uniform jitter in `[JITTER_MIN, JITTER_MAX]` drawn from an RNG
#[derive(Debug, Clone)]
pub struct RandomJitter<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    /// Wrap an existing RNG
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomJitter<StdRng> {
    /// Jitter seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible jitter from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> JitterSource for RandomJitter<R> {
    fn factor(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..=JITTER_MAX)
    }
}

/// Constant jitter factor, for deterministic output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn factor(&mut self) -> f64 {
        self.0
    }
}

/// Project `horizon_days` daily points starting the day after `start`
///
/// The trend is scaled by `day / 30` whatever the granularity of the input
/// series. Values are rounded and floored at zero.
pub fn forecast(
    series: &Series,
    horizon_days: usize,
    profile: &SeasonalProfile,
    start: NaiveDate,
    jitter: &mut dyn JitterSource,
) -> Result<Vec<ForecastPoint>> {
    let anchor = series.last().map(|o| o.value).unwrap_or(0.0);

    (1..=horizon_days)
        .map(|day| {
            let date = start.checked_add_days(Days::new(day as u64)).ok_or_else(|| {
                TrendsError::DataError(format!(
                    "Forecast date overflow {} days after {}",
                    day, start
                ))
            })?;

            let trend_projection = profile.trend * (day as f64 / TREND_RATE_DAYS);
            let seasonal_factor = profile.seasonal_for_month(date.month());
            let projected = (anchor + trend_projection + seasonal_factor) * jitter.factor();

            Ok(ForecastPoint::new(date, projected.round().max(0.0)))
        })
        .collect()
}
