//! # Seasonal Trends Workspace
//!
//! Facade over the workspace crates:
//!
//! - [`math`]: moving averages and dispersion statistics (`seasonal_math`)
//! - [`trends`]: decomposition, forecast, confidence, volatility, insights
//!   and the cached report engine (`seasonal_trends`)
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use seasonal_trends_workspace::trends::{decompose, Series};
//!
//! let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
//! let series = Series::from_monthly_values(start, &[120.0; 12]).unwrap();
//! let profile = decompose(&series).unwrap();
//! assert_eq!(profile.trend, 120.0);
//! assert_eq!(profile.seasonal_strength, 0.0);
//! ```

pub use seasonal_math as math;
pub use seasonal_trends as trends;

pub use seasonal_trends::{
    SeasonalTrendsEngine, SeasonalTrendsReport, TrendOptions, TrendsConfig, TrendsError,
};
