//! Dispersion statistics
//!
//! Population (not sample) statistics: variance divides by `n`.

use crate::{MathError, Result};

fn require_data(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(format!(
            "Need at least one value to calculate {}",
            what
        )));
    }
    Ok(())
}

/// Arithmetic mean of `values`
pub fn mean(values: &[f64]) -> Result<f64> {
    require_data(values, "mean")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance of `values`
pub fn population_variance(values: &[f64]) -> Result<f64> {
    require_data(values, "variance")?;
    let mean = mean(values)?;

    let variance = values
        .iter()
        .map(|&value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;

    Ok(variance)
}

/// Population standard deviation of `values`
pub fn population_std_dev(values: &[f64]) -> Result<f64> {
    Ok(population_variance(values)?.sqrt())
}

/// Period-over-period relative changes `(v[i] - v[i-1]) / v[i-1]`
///
/// Pairs whose base value is zero have no defined relative change and are
/// skipped.
pub fn relative_returns(values: &[f64]) -> Vec<f64> {
    values
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| (w[1] - w[0]) / w[0])
        .collect()
}

/// Index of the first maximum value
pub fn arg_max(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

/// Index of the first minimum value
pub fn arg_min(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &value) in values.iter().enumerate() {
        match best {
            Some((_, current)) if value >= current => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}
