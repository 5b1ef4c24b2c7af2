//! Request options and engine configuration

use crate::data::Period;
use crate::error::{Result, TrendsError};
use crate::forecast::{FixedJitter, JitterSource, RandomJitter};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Default cache lifetime for a report
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
/// Default forecast horizon in days
pub const DEFAULT_FORECAST_PERIOD: usize = 30;
/// Category that selects every product
pub const ALL_CATEGORIES: &str = "all";

const ENV_CACHE_TTL: &str = "SEASONAL_TRENDS_CACHE_TTL";
const ENV_JITTER_SEED: &str = "SEASONAL_TRENDS_JITTER_SEED";
const ENV_DATA_FILE: &str = "SEASONAL_TRENDS_DATA_FILE";

/// Options of a single report request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendOptions {
    /// Historical span to analyse
    pub period: Period,
    /// Forecast horizon in days
    pub forecast_period: usize,
    /// Whether to compute confidence bands
    pub show_confidence: bool,
    /// Product category, `all` for every category
    pub category: String,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            period: Period::default(),
            forecast_period: DEFAULT_FORECAST_PERIOD,
            show_confidence: true,
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

impl TrendOptions {
    /// Cache key for the report; `show_confidence` does not take part
    pub fn cache_key(&self) -> String {
        format!(
            "seasonal_trends:{}:{}:{}",
            self.period, self.forecast_period, self.category
        )
    }
}

/// How the forecast stage draws its jitter factor
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JitterStrategy {
    /// Fresh entropy for every report
    #[default]
    Random,
    /// Same seed for every report
    Seeded(u64),
    /// Constant factor, no randomness
    Fixed(f64),
}

impl JitterStrategy {
    /// Build the jitter source for one report
    pub fn source(&self) -> Box<dyn JitterSource + Send> {
        match *self {
            JitterStrategy::Random => Box::new(RandomJitter::from_entropy()),
            JitterStrategy::Seeded(seed) => Box::new(RandomJitter::seeded(seed)),
            JitterStrategy::Fixed(factor) => Box::new(FixedJitter(factor)),
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendsConfig {
    /// Lifetime of a cached report in seconds
    pub cache_ttl_secs: u64,
    /// Options used when a request leaves them out
    pub default_options: TrendOptions,
    pub jitter: JitterStrategy,
    /// CSV file with historical sales, synthetic data when absent
    pub data_file: Option<PathBuf>,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            default_options: TrendOptions::default(),
            jitter: JitterStrategy::default(),
            data_file: None,
        }
    }
}

impl TrendsConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ttl) = lookup(ENV_CACHE_TTL) {
            config.cache_ttl_secs = parse_var(ENV_CACHE_TTL, &ttl)?;
        }
        if let Some(seed) = lookup(ENV_JITTER_SEED) {
            config.jitter = JitterStrategy::Seeded(parse_var(ENV_JITTER_SEED, &seed)?);
        }
        if let Some(path) = lookup(ENV_DATA_FILE) {
            if !path.trim().is_empty() {
                config.data_file = Some(PathBuf::from(path));
            }
        }

        Ok(config)
    }

    /// Cache lifetime as a duration
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        TrendsError::InvalidParameter(format!("{} has an invalid value: {}", name, raw))
    })
}
