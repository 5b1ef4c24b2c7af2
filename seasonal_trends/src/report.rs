//! Assembled seasonal trends report and its endpoint views

use crate::confidence::ConfidenceBand;
use crate::data::{month_name, Period, Series};
use crate::decomposition::SeasonalProfile;
use crate::forecast::ForecastPoint;
use crate::insights::Insight;
use crate::volatility::VolatilityReport;
use chrono::{DateTime, Utc};
use seasonal_math::{arg_max, arg_min};
use serde::{Deserialize, Serialize};

/// Decomposition output with the peak and low months named
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalAnalysis {
    #[serde(flatten)]
    pub profile: SeasonalProfile,
    pub peak_month: String,
    pub low_month: String,
}

impl From<SeasonalProfile> for SeasonalAnalysis {
    fn from(profile: SeasonalProfile) -> Self {
        let peak = arg_max(&profile.seasonal).unwrap_or(0);
        let low = arg_min(&profile.seasonal).unwrap_or(0);
        Self {
            peak_month: month_name(peak as u32 + 1).to_string(),
            low_month: month_name(low as u32 + 1).to_string(),
            profile,
        }
    }
}

/// Request echo and provenance of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub period: Period,
    pub forecast_period: usize,
    pub category: String,
    pub generated_at: DateTime<Utc>,
    /// Historical plus forecast points
    pub data_points: usize,
}

/// Full seasonal trends report, immutable once built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalTrendsReport {
    pub historical: Series,
    pub forecast: Vec<ForecastPoint>,
    /// `None` when confidence bands were not requested
    pub confidence: Option<Vec<ConfidenceBand>>,
    pub seasonal_analysis: SeasonalAnalysis,
    pub volatility: VolatilityReport,
    pub insights: Vec<Insight>,
    pub metadata: ReportMetadata,
}

/// Insights endpoint payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisView {
    pub insights: Vec<Insight>,
    pub seasonal_analysis: SeasonalAnalysis,
    pub volatility: VolatilityReport,
}

/// Forecast endpoint payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastView {
    pub forecast: Vec<ForecastPoint>,
    pub confidence: Option<Vec<ConfidenceBand>>,
    pub metadata: ReportMetadata,
}

impl SeasonalTrendsReport {
    /// `{insights, seasonalAnalysis, volatility}` only
    pub fn analysis_view(&self) -> AnalysisView {
        AnalysisView {
            insights: self.insights.clone(),
            seasonal_analysis: self.seasonal_analysis.clone(),
            volatility: self.volatility.clone(),
        }
    }

    /// `{forecast, confidence, metadata}` only
    pub fn forecast_view(&self) -> ForecastView {
        ForecastView {
            forecast: self.forecast.clone(),
            confidence: self.confidence.clone(),
            metadata: self.metadata.clone(),
        }
    }
}
