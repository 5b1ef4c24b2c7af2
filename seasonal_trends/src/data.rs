//! Historical sales series

use crate::error::{Result, TrendsError};
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single aggregate sales observation for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Start date of the period
    pub date: NaiveDate,
    /// Aggregate value, never negative
    pub value: f64,
    /// Calendar month (1-12)
    pub month: u32,
    /// Calendar year
    pub year: i32,
    /// Calendar quarter (1-4)
    pub quarter: u32,
}

impl Observation {
    /// Create an observation, deriving month, year and quarter from `date`
    ///
    /// Negative (or NaN) values are clamped to zero.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        let month = date.month();
        Self {
            date,
            value: value.max(0.0),
            month,
            year: date.year(),
            quarter: (month - 1) / 3 + 1,
        }
    }
}

/// Chronologically ordered series, one observation per period
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    observations: Vec<Observation>,
}

impl Series {
    /// Create a series from observations already in chronological order
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }

    /// Build a monthly series starting at `start`, one value per month
    pub fn from_monthly_values(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let observations = values
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                start
                    .checked_add_months(Months::new(i as u32))
                    .map(|date| Observation::new(date, value))
                    .ok_or_else(|| {
                        TrendsError::DataError(format!(
                            "Date overflow {} months after {}",
                            i, start
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let series = Self { observations };
        series.ensure_finite()?;
        Ok(series)
    }

    /// Fail with `DataError` on the first NaN or infinite value
    pub fn ensure_finite(&self) -> Result<()> {
        match self.observations.iter().find(|o| !o.value.is_finite()) {
            Some(o) => Err(TrendsError::DataError(format!(
                "Non-finite sales value {} for {}",
                o.value, o.date
            ))),
            None => Ok(()),
        }
    }

    /// Get the observations
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Get the values as a vector
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Get the most recent observation
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Iterate over the observations
    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get the length of the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }
}

impl From<Vec<Observation>> for Series {
    fn from(observations: Vec<Observation>) -> Self {
        Self::new(observations)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Historical span requested from the series supplier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "6m")]
    SixMonths,
    #[default]
    #[serde(rename = "12m")]
    TwelveMonths,
    #[serde(rename = "24m")]
    TwentyFourMonths,
}

impl Period {
    /// Number of calendar months covered
    pub fn months(&self) -> u32 {
        match self {
            Period::SixMonths => 6,
            Period::TwelveMonths => 12,
            Period::TwentyFourMonths => 24,
        }
    }

    /// Short label as used in requests and cache keys
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::SixMonths => "6m",
            Period::TwelveMonths => "12m",
            Period::TwentyFourMonths => "24m",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = TrendsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "6m" => Ok(Period::SixMonths),
            "12m" => Ok(Period::TwelveMonths),
            "24m" => Ok(Period::TwentyFourMonths),
            other => Err(TrendsError::InvalidParameter(format!(
                "Unsupported period: {} (expected 6m, 12m or 24m)",
                other
            ))),
        }
    }
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    NAMES
        .get((month as usize).wrapping_sub(1))
        .copied()
        .unwrap_or("Unknown")
}
