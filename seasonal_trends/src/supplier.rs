//! Historical series suppliers

use crate::config::ALL_CATEGORIES;
use crate::data::{Observation, Period, Series};
use crate::error::{Result, TrendsError};
use async_trait::async_trait;
use chrono::{Datelike, Months, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Source of the monthly historical sales series
#[async_trait]
pub trait SeriesSupplier: Send + Sync {
    /// Ordered series covering `period` for `category`
    async fn fetch(&self, period: Period, category: &str) -> Result<Series>;
}

/// Relative monthly demand used by the synthetic series, January first
const MONTHLY_PATTERN: [f64; 12] = [
    0.85, 0.80, 0.90, 0.95, 1.00, 1.00, 0.95, 0.90, 0.95, 1.05, 1.20, 1.35,
];

/// Generated series: one observation per calendar month up to the current month
///
/// The synthetic source has no categories: every category yields the same
/// series, so the category only separates cache entries.
#[derive(Debug, Clone)]
pub struct SyntheticSupplier {
    base: f64,
    seed: Option<u64>,
    end_month: Option<NaiveDate>,
}

impl Default for SyntheticSupplier {
    fn default() -> Self {
        Self {
            base: 10_000.0,
            seed: None,
            end_month: None,
        }
    }
}

impl SyntheticSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Average monthly level before seasonality and noise
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = base;
        self
    }

    /// Make the noise reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the last month of the series instead of using today
    pub fn with_end_month(mut self, end_month: NaiveDate) -> Self {
        self.end_month = Some(end_month);
        self
    }

    fn generate(&self, period: Period) -> Result<Series> {
        let end = first_of_month(self.end_month.unwrap_or_else(|| Utc::now().date_naive()));
        let months = period.months();
        let start = end
            .checked_sub_months(Months::new(months - 1))
            .ok_or_else(|| TrendsError::DataError(format!("Cannot go back {} months", months)))?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let values: Vec<f64> = (0..months)
            .map(|i| {
                let month = (start.month0() + i) % 12;
                let noise = rng.gen_range(0.9..=1.1);
                (self.base * MONTHLY_PATTERN[month as usize] * noise).round()
            })
            .collect();

        Series::from_monthly_values(start, &values)
    }
}

#[async_trait]
impl SeriesSupplier for SyntheticSupplier {
    async fn fetch(&self, period: Period, category: &str) -> Result<Series> {
        let series = self.generate(period)?;
        debug!(%period, category, observations = series.len(), "Generated synthetic series");
        Ok(series)
    }
}

#[derive(Debug, Deserialize)]
struct SalesRecord {
    date: NaiveDate,
    value: f64,
    #[serde(default)]
    category: Option<String>,
}

/// Series aggregated from a `date,value[,category]` CSV file
///
/// Rows are summed per calendar month. Months missing inside the covered
/// span count as zero sales.
#[derive(Debug, Clone)]
pub struct CsvSupplier {
    path: PathBuf,
}

impl CsvSupplier {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and aggregate the file synchronously
    pub fn load(&self, period: Period, category: &str) -> Result<Series> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut monthly: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for record in reader.deserialize() {
            let record: SalesRecord = record?;
            if !matches_category(record.category.as_deref(), category) {
                continue;
            }
            *monthly.entry(first_of_month(record.date)).or_insert(0.0) += record.value;
        }

        let (first, last) = match (monthly.keys().next(), monthly.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => {
                warn!(path = %self.path.display(), category, "No sales rows matched");
                return Ok(Series::default());
            }
        };

        let months = period.months();
        let start = last
            .checked_sub_months(Months::new(months - 1))
            .map_or(first, |start| start.max(first));

        let mut observations = Vec::with_capacity(months as usize);
        let mut month = start;
        while month <= last {
            let value = monthly.get(&month).copied().unwrap_or(0.0);
            // NaN rows or sums overflowing to infinity
            if !value.is_finite() {
                return Err(TrendsError::DataError(format!(
                    "Non-finite sales total {} for {}",
                    value, month
                )));
            }
            observations.push(Observation::new(month, value));
            month = month.checked_add_months(Months::new(1)).ok_or_else(|| {
                TrendsError::DataError(format!("Date overflow after {}", month))
            })?;
        }

        Ok(Series::new(observations))
    }
}

#[async_trait]
impl SeriesSupplier for CsvSupplier {
    async fn fetch(&self, period: Period, category: &str) -> Result<Series> {
        let supplier = self.clone();
        let category = category.to_string();

        let series = tokio::task::spawn_blocking(move || supplier.load(period, &category))
            .await
            .map_err(|e| TrendsError::Task(format!("CSV loader task failed: {}", e)))??;

        debug!(path = %self.path.display(), observations = series.len(), "Loaded CSV series");
        Ok(series)
    }
}

fn matches_category(row: Option<&str>, requested: &str) -> bool {
    if requested.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return true;
    }
    row.is_some_and(|c| c.trim().eq_ignore_ascii_case(requested.trim()))
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
