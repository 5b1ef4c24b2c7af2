use chrono::{Datelike, Utc};
use seasonal_trends_workspace::trends::{
    InMemoryCache, JitterStrategy, Period, SeasonalTrendsEngine, SyntheticSupplier, TrendOptions,
    TrendsConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Seasonal Trends: Synthetic Sales Example");
    println!("========================================\n");

    let config = TrendsConfig {
        jitter: JitterStrategy::Seeded(2024),
        ..TrendsConfig::default()
    };
    let supplier = SyntheticSupplier::new().with_seed(7);
    let engine = SeasonalTrendsEngine::new(supplier, InMemoryCache::new(), config);

    for period in [Period::SixMonths, Period::TwelveMonths, Period::TwentyFourMonths] {
        let options = TrendOptions {
            period,
            forecast_period: 60,
            ..TrendOptions::default()
        };
        let report = engine.generate_seasonal_trends(&options).await?;

        println!(
            "{} history: {} points, seasonal strength {:.2}, volatility {:.1}% ({})",
            period,
            report.historical.len(),
            report.seasonal_analysis.profile.seasonal_strength,
            report.volatility.value,
            report.volatility.level
        );
        for insight in &report.insights {
            println!("  [{:?}] {}", insight.priority, insight.title);
        }
        println!();
    }

    let options = TrendOptions::default();
    let view = engine.forecast(&options).await?;
    let today = Utc::now().date_naive();
    println!(
        "Forecast from {}-{:02}-{:02}, first point {:?}",
        today.year(),
        today.month(),
        today.day(),
        view.forecast.first().map(|p| p.value())
    );
    println!("{}", serde_json::to_string_pretty(&view.metadata)?);

    Ok(())
}
