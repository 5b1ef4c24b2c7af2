//! Seasonal trends orchestration
//!
//! Runs decomposition, forecast, confidence (when requested), volatility and
//! insights in that order behind a report cache. Each stage only consumes the
//! outputs of earlier stages.

use crate::cache::CacheStore;
use crate::config::{TrendOptions, TrendsConfig};
use crate::confidence::confidence_intervals;
use crate::data::Series;
use crate::decomposition::decompose;
use crate::error::{Result, TrendsError};
use crate::forecast::{forecast, JitterSource};
use crate::insights::insights;
use crate::report::{AnalysisView, ForecastView, ReportMetadata, SeasonalTrendsReport};
use crate::supplier::SeriesSupplier;
use crate::volatility::volatility;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Build a report from a historical series, without touching any cache
pub fn build_report(
    historical: Series,
    options: &TrendOptions,
    jitter: &mut dyn JitterSource,
    now: DateTime<Utc>,
) -> Result<SeasonalTrendsReport> {
    historical.ensure_finite()?;
    let profile = decompose(&historical)?;
    debug!(strength = profile.seasonal_strength, "Decomposition complete");

    let forecast_points = forecast(
        &historical,
        options.forecast_period,
        &profile,
        now.date_naive(),
        jitter,
    )?;

    let confidence = options
        .show_confidence
        .then(|| confidence_intervals(&forecast_points, &historical));

    let volatility = volatility(&historical);
    debug!(value = volatility.value, level = %volatility.level, "Volatility classified");

    let insights = insights(&profile, &forecast_points, &volatility);

    let metadata = ReportMetadata {
        period: options.period,
        forecast_period: options.forecast_period,
        category: options.category.clone(),
        generated_at: now,
        data_points: historical.len() + forecast_points.len(),
    };

    Ok(SeasonalTrendsReport {
        historical,
        forecast: forecast_points,
        confidence,
        seasonal_analysis: profile.into(),
        volatility,
        insights,
        metadata,
    })
}

/// Cached seasonal trends service
#[derive(Clone)]
pub struct SeasonalTrendsEngine {
    supplier: Arc<dyn SeriesSupplier>,
    cache: Arc<dyn CacheStore>,
    config: TrendsConfig,
}

impl SeasonalTrendsEngine {
    pub fn new<S, C>(supplier: S, cache: C, config: TrendsConfig) -> Self
    where
        S: SeriesSupplier + 'static,
        C: CacheStore + 'static,
    {
        Self {
            supplier: Arc::new(supplier),
            cache: Arc::new(cache),
            config,
        }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &TrendsConfig {
        &self.config
    }

    /// Full report, served from cache when a live entry exists
    ///
    /// On a miss the computation runs as its own task: if the caller stops
    /// waiting, the report is still built and cached.
    pub async fn generate_seasonal_trends(
        &self,
        options: &TrendOptions,
    ) -> Result<SeasonalTrendsReport> {
        let key = options.cache_key();

        if let Some(cached) = self.cache.get(&key).await? {
            debug!(%key, "Cache hit");
            return Ok(serde_json::from_str(&cached)?);
        }
        debug!(%key, "Cache miss");

        let engine = self.clone();
        let options = options.clone();
        tokio::spawn(async move { engine.compute_and_store(key, options).await })
            .await
            .map_err(|e| TrendsError::Task(format!("Report computation failed: {}", e)))?
    }

    async fn compute_and_store(
        &self,
        key: String,
        options: TrendOptions,
    ) -> Result<SeasonalTrendsReport> {
        let historical = self
            .supplier
            .fetch(options.period, &options.category)
            .await?;

        let report = {
            let mut jitter = self.config.jitter.source();
            build_report(historical, &options, &mut *jitter, Utc::now())?
        };

        let encoded = serde_json::to_string(&report)?;
        self.cache.set(&key, encoded, self.config.cache_ttl()).await?;

        info!(
            %key,
            historical = report.historical.len(),
            forecast = report.forecast.len(),
            insights = report.insights.len(),
            "Generated seasonal trends report"
        );
        Ok(report)
    }

    /// `{insights, seasonalAnalysis, volatility}` of the report
    pub async fn analysis(&self, options: &TrendOptions) -> Result<AnalysisView> {
        Ok(self.generate_seasonal_trends(options).await?.analysis_view())
    }

    /// `{forecast, confidence, metadata}` of the report
    pub async fn forecast(&self, options: &TrendOptions) -> Result<ForecastView> {
        Ok(self.generate_seasonal_trends(options).await?.forecast_view())
    }

    /// Drop the cached report for `options`
    pub async fn invalidate(&self, options: &TrendOptions) -> Result<bool> {
        let key = options.cache_key();
        let removed = self.cache.delete(&key).await?;
        info!(%key, removed, "Invalidated seasonal trends report");
        Ok(removed)
    }

    /// Drop every cached report
    pub async fn invalidate_all(&self) -> Result<()> {
        self.cache.clear().await?;
        info!("Cleared seasonal trends cache");
        Ok(())
    }
}
