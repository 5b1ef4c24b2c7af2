//! Print a seasonal trends report as JSON
//!
//! Usage: `seasonal-report [period] [forecastPeriod] [category]`
//!
//! History comes from `SEASONAL_TRENDS_DATA_FILE` when set, otherwise from
//! the synthetic supplier. Log verbosity follows `RUST_LOG`.

use seasonal_trends::{
    CsvSupplier, InMemoryCache, SeasonalTrendsEngine, SyntheticSupplier, TrendOptions, TrendsConfig,
    TrendsError,
};
use tracing_subscriber::EnvFilter;

fn parse_options(defaults: &TrendOptions) -> Result<TrendOptions, TrendsError> {
    let mut options = defaults.clone();
    let mut args = std::env::args().skip(1);

    if let Some(period) = args.next() {
        options.period = period.parse()?;
    }
    if let Some(days) = args.next() {
        options.forecast_period = days.parse().map_err(|_| {
            TrendsError::InvalidParameter(format!(
                "forecastPeriod must be a whole number of days: {}",
                days
            ))
        })?;
    }
    if let Some(category) = args.next() {
        options.category = category;
    }

    Ok(options)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = TrendsConfig::from_env()?;
    let options = parse_options(&config.default_options)?;

    let engine = match config.data_file.clone() {
        Some(path) => {
            SeasonalTrendsEngine::new(CsvSupplier::new(path), InMemoryCache::new(), config)
        }
        None => SeasonalTrendsEngine::new(SyntheticSupplier::new(), InMemoryCache::new(), config),
    };

    let report = engine.generate_seasonal_trends(&options).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
