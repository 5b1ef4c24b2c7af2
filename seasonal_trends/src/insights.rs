//! Rule-based insights
//!
//! Rules are evaluated in a fixed order and every applicable rule fires:
//! 1. Peak season (month with the largest seasonal index)
//! 2. Low season (month with the smallest seasonal index)
//! 3. Volatility warning, only when volatility is high
//! 4. Forecast trend, first vs last forecast value
//!
//! Nothing is deduplicated or merged.

use crate::data::month_name;
use crate::decomposition::SeasonalProfile;
use crate::forecast::ForecastPoint;
use crate::volatility::{VolatilityLevel, VolatilityReport};
use seasonal_math::{arg_max, arg_min};
use serde::{Deserialize, Serialize};

/// Which rule produced an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    PeakSeason,
    LowSeason,
    Volatility,
    ForecastTrend,
}

/// Urgency of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Expected business impact of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A structured textual insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub impact: Impact,
    pub actionable: bool,
}

/// Generate the ordered insight list
pub fn insights(
    profile: &SeasonalProfile,
    forecast_points: &[ForecastPoint],
    volatility: &VolatilityReport,
) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(4);

    if let Some(peak) = arg_max(&profile.seasonal) {
        let month = month_name(peak as u32 + 1);
        insights.push(Insight {
            kind: InsightType::PeakSeason,
            title: format!("Peak Season: {}", month),
            description: format!(
                "{} runs {:+.0} against trend, the strongest month of the year. \
                 Stock up and schedule campaigns ahead of it.",
                month, profile.seasonal[peak]
            ),
            priority: Priority::High,
            impact: Impact::High,
            actionable: true,
        });
    }

    if let Some(low) = arg_min(&profile.seasonal) {
        let month = month_name(low as u32 + 1);
        insights.push(Insight {
            kind: InsightType::LowSeason,
            title: format!("Low Season: {}", month),
            description: format!(
                "{} runs {:+.0} against trend, the weakest month of the year. \
                 Consider promotions or clearance pricing to lift demand.",
                month, profile.seasonal[low]
            ),
            priority: Priority::Medium,
            impact: Impact::Medium,
            actionable: true,
        });
    }

    if volatility.level == VolatilityLevel::High {
        insights.push(Insight {
            kind: InsightType::Volatility,
            title: "High Sales Volatility".to_string(),
            description: format!(
                "Sales swing {:.1}% period over period. Keep extra safety stock \
                 and review pricing more often.",
                volatility.value
            ),
            priority: Priority::High,
            impact: Impact::High,
            actionable: true,
        });
    }

    if let (Some(first), Some(last)) = (forecast_points.first(), forecast_points.last()) {
        let (first, last) = (first.value(), last.value());
        let direction = if last > first { "increasing" } else { "decreasing" };
        let change = if first > 0.0 {
            (last - first) / first * 100.0
        } else {
            0.0
        };

        insights.push(Insight {
            kind: InsightType::ForecastTrend,
            title: format!("Forecast Trend: {}", capitalize(direction)),
            description: format!(
                "Sales are {} over the next {} days ({:+.1}% from first to last forecast day).",
                direction,
                forecast_points.len(),
                change
            ),
            priority: Priority::Medium,
            impact: Impact::Medium,
            actionable: false,
        });
    }

    insights
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
