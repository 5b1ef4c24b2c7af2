use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, TimeZone, Utc};
use pretty_assertions::assert_eq;
use seasonal_trends::cache::{CacheStore, InMemoryCache};
use seasonal_trends::config::{JitterStrategy, TrendOptions, TrendsConfig};
use seasonal_trends::data::{Observation, Period, Series};
use seasonal_trends::engine::{build_report, SeasonalTrendsEngine};
use seasonal_trends::error::{Result, TrendsError};
use seasonal_trends::forecast::FixedJitter;
use seasonal_trends::supplier::SeriesSupplier;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

const MONTHLY_SALES: [f64; 12] = [
    100.0, 90.0, 95.0, 105.0, 110.0, 120.0, 95.0, 85.0, 100.0, 110.0, 140.0, 160.0,
];

/// Supplier returning a fixed series and counting calls
#[derive(Clone, Default)]
struct CountingSupplier {
    calls: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl CountingSupplier {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeriesSupplier for CountingSupplier {
    async fn fetch(&self, _period: Period, _category: &str) -> Result<Series> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        Series::from_monthly_values(start, &MONTHLY_SALES)
    }
}

struct FailingSupplier;

#[async_trait]
impl SeriesSupplier for FailingSupplier {
    async fn fetch(&self, _period: Period, _category: &str) -> Result<Series> {
        Err(TrendsError::Supplier("database unavailable".to_string()))
    }
}

struct FailingCache;

#[async_trait]
impl CacheStore for FailingCache {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(TrendsError::Cache("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<()> {
        Err(TrendsError::Cache("connection refused".to_string()))
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Err(TrendsError::Cache("connection refused".to_string()))
    }

    async fn clear(&self) -> Result<()> {
        Err(TrendsError::Cache("connection refused".to_string()))
    }
}

fn fixed_config() -> TrendsConfig {
    TrendsConfig {
        jitter: JitterStrategy::Fixed(1.0),
        ..TrendsConfig::default()
    }
}

fn engine_with(supplier: CountingSupplier, cache: InMemoryCache) -> SeasonalTrendsEngine {
    SeasonalTrendsEngine::new(supplier, cache, fixed_config())
}

#[tokio::test]
async fn test_report_shape() {
    let engine = engine_with(CountingSupplier::default(), InMemoryCache::new());
    let options = TrendOptions::default();

    let report = engine.generate_seasonal_trends(&options).await.unwrap();

    assert_eq!(report.historical.len(), 12);
    assert_eq!(report.forecast.len(), 30);
    assert_eq!(report.confidence.as_ref().map(Vec::len), Some(30));
    assert_eq!(report.metadata.data_points, 42);
    assert_eq!(report.metadata.period, Period::TwelveMonths);
    assert_eq!(report.metadata.forecast_period, 30);
    assert_eq!(report.metadata.category, "all");
    assert_eq!(report.seasonal_analysis.peak_month, "December");
    assert!(report.insights[0].title.contains("December"));
    assert!(report.forecast.iter().all(|p| p.is_forecast && p.value() >= 0.0));
}

#[tokio::test]
async fn test_confidence_omitted_when_not_requested() {
    let engine = engine_with(CountingSupplier::default(), InMemoryCache::new());
    let options = TrendOptions {
        show_confidence: false,
        forecast_period: 7,
        ..TrendOptions::default()
    };

    let report = engine.generate_seasonal_trends(&options).await.unwrap();
    assert!(report.confidence.is_none());
    assert_eq!(report.forecast.len(), 7);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["confidence"].is_null());
}

#[tokio::test]
async fn test_second_call_is_served_from_cache() {
    let supplier = CountingSupplier::default();
    let engine = engine_with(supplier.clone(), InMemoryCache::new());
    let options = TrendOptions::default();

    let first = engine.generate_seasonal_trends(&options).await.unwrap();
    let second = engine.generate_seasonal_trends(&options).await.unwrap();

    assert_eq!(first.metadata.generated_at, second.metadata.generated_at);
    assert_eq!(first, second);
    assert_eq!(supplier.calls(), 1);
}

#[tokio::test]
async fn test_cache_key_separates_options() {
    let supplier = CountingSupplier::default();
    let engine = engine_with(supplier.clone(), InMemoryCache::new());

    let base = TrendOptions::default();
    let other_category = TrendOptions {
        category: "shoes".to_string(),
        ..TrendOptions::default()
    };
    let other_horizon = TrendOptions {
        forecast_period: 14,
        ..TrendOptions::default()
    };

    engine.generate_seasonal_trends(&base).await.unwrap();
    engine.generate_seasonal_trends(&other_category).await.unwrap();
    engine.generate_seasonal_trends(&other_horizon).await.unwrap();

    assert_eq!(supplier.calls(), 3);
}

#[tokio::test]
async fn test_invalidate_forces_recompute() {
    let supplier = CountingSupplier::default();
    let cache = InMemoryCache::new();
    let engine = engine_with(supplier.clone(), cache.clone());
    let options = TrendOptions::default();

    engine.generate_seasonal_trends(&options).await.unwrap();
    assert!(engine.invalidate(&options).await.unwrap());
    assert!(!engine.invalidate(&options).await.unwrap());
    assert!(cache.is_empty().await);

    engine.generate_seasonal_trends(&options).await.unwrap();
    assert_eq!(supplier.calls(), 2);

    engine.invalidate_all().await.unwrap();
    assert!(cache.is_empty().await);
}

#[tokio::test(start_paused = true)]
async fn test_cache_entry_expires_after_ttl() {
    let supplier = CountingSupplier::default();
    let config = TrendsConfig {
        cache_ttl_secs: 60,
        ..fixed_config()
    };
    let engine = SeasonalTrendsEngine::new(supplier.clone(), InMemoryCache::new(), config);
    let options = TrendOptions::default();

    engine.generate_seasonal_trends(&options).await.unwrap();
    tokio::time::advance(Duration::from_secs(61)).await;
    engine.generate_seasonal_trends(&options).await.unwrap();

    assert_eq!(supplier.calls(), 2);
}

#[tokio::test]
async fn test_abandoned_request_still_fills_cache() {
    let supplier = CountingSupplier {
        delay: Some(Duration::from_millis(50)),
        ..CountingSupplier::default()
    };
    let cache = InMemoryCache::new();
    let engine = engine_with(supplier.clone(), cache.clone());
    let options = TrendOptions::default();

    let abandoned = tokio::time::timeout(
        Duration::from_millis(5),
        engine.generate_seasonal_trends(&options),
    )
    .await;
    assert!(abandoned.is_err());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(cache.len().await, 1);

    engine.generate_seasonal_trends(&options).await.unwrap();
    assert_eq!(supplier.calls(), 1);
}

#[tokio::test]
async fn test_endpoint_views() {
    let engine = engine_with(CountingSupplier::default(), InMemoryCache::new());
    let options = TrendOptions::default();

    let report = engine.generate_seasonal_trends(&options).await.unwrap();
    let analysis = engine.analysis(&options).await.unwrap();
    let forecast = engine.forecast(&options).await.unwrap();

    assert_eq!(analysis.insights, report.insights);
    assert_eq!(analysis.seasonal_analysis, report.seasonal_analysis);
    assert_eq!(analysis.volatility, report.volatility);
    assert_eq!(forecast.forecast, report.forecast);
    assert_eq!(forecast.confidence, report.confidence);
    assert_eq!(forecast.metadata, report.metadata);

    let json = serde_json::to_value(&analysis).unwrap();
    assert!(json.get("seasonalAnalysis").is_some());
    assert!(json.get("forecast").is_none());
}

#[tokio::test]
async fn test_supplier_failure_propagates() {
    let engine = SeasonalTrendsEngine::new(FailingSupplier, InMemoryCache::new(), fixed_config());

    let err = engine
        .generate_seasonal_trends(&TrendOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrendsError::Supplier(msg) if msg == "database unavailable"));
}

#[tokio::test]
async fn test_cache_failure_propagates() {
    let engine =
        SeasonalTrendsEngine::new(CountingSupplier::default(), FailingCache, fixed_config());

    let err = engine
        .generate_seasonal_trends(&TrendOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, TrendsError::Cache(_)));
    assert!(engine.invalidate_all().await.is_err());
}

#[tokio::test]
async fn test_corrupt_cache_entry_is_an_error() {
    let cache = InMemoryCache::new();
    let options = TrendOptions::default();
    cache
        .set(&options.cache_key(), "not json".to_string(), Duration::from_secs(60))
        .await
        .unwrap();

    let engine = engine_with(CountingSupplier::default(), cache);
    let err = engine.generate_seasonal_trends(&options).await.unwrap_err();
    assert!(matches!(err, TrendsError::Serialization(_)));
}

#[test]
fn test_build_report_rejects_non_finite_history() {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let historical = Series::new(vec![
        Observation::new(start, 100.0),
        Observation::new(start.with_month(2).unwrap(), f64::INFINITY),
    ]);
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();

    let options = TrendOptions::default();
    let err = build_report(historical, &options, &mut FixedJitter(1.0), now).unwrap_err();
    assert!(matches!(err, TrendsError::DataError(_)));
}
