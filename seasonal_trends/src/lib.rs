//! # Seasonal Trends
//!
//! Seasonal decomposition and short-horizon forecasting of aggregate sales.
//!
//! ## Pipeline
//!
//! - **Decomposition**: moving-average trend, 12-slot calendar-month seasonal
//!   index and irregular residual
//! - **Forecast**: last value + scaled trend + seasonal index, with jitter
//! - **Confidence**: bands from historical dispersion and a decaying factor
//! - **Volatility**: dispersion of period-over-period returns, low/medium/high
//! - **Insights**: peak season, low season, volatility and forecast trend
//!
//! The [`SeasonalTrendsEngine`] runs the pipeline behind a [`CacheStore`],
//! fetching history from a [`SeriesSupplier`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seasonal_trends::{
//!     InMemoryCache, SeasonalTrendsEngine, SyntheticSupplier, TrendOptions, TrendsConfig,
//! };
//!
//! # async fn run() -> seasonal_trends::Result<()> {
//! let engine = SeasonalTrendsEngine::new(
//!     SyntheticSupplier::new(),
//!     InMemoryCache::new(),
//!     TrendsConfig::default(),
//! );
//!
//! let report = engine.generate_seasonal_trends(&TrendOptions::default()).await?;
//! for insight in &report.insights {
//!     println!("{}: {}", insight.title, insight.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod confidence;
pub mod config;
pub mod data;
pub mod decomposition;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod insights;
pub mod report;
pub mod supplier;
pub mod volatility;

// Re-export commonly used types
pub use crate::cache::{CacheStore, InMemoryCache};
pub use crate::confidence::{confidence_intervals, ConfidenceBand};
pub use crate::config::{JitterStrategy, TrendOptions, TrendsConfig};
pub use crate::data::{Observation, Period, Series};
pub use crate::decomposition::{decompose, SeasonalProfile};
pub use crate::engine::{build_report, SeasonalTrendsEngine};
pub use crate::error::{Result, TrendsError};
pub use crate::forecast::{forecast, FixedJitter, ForecastPoint, JitterSource, RandomJitter};
pub use crate::insights::{insights, Impact, Insight, InsightType, Priority};
pub use crate::report::{
    AnalysisView, ForecastView, ReportMetadata, SeasonalAnalysis, SeasonalTrendsReport,
};
pub use crate::supplier::{CsvSupplier, SeriesSupplier, SyntheticSupplier};
pub use crate::volatility::{volatility, VolatilityLevel, VolatilityReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
