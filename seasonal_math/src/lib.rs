//! # Seasonal Math
//!
//! Numeric building blocks for seasonal trend analysis.
//! This crate provides the moving averages and dispersion statistics
//! used by the decomposition, confidence and volatility stages.

use thiserror::Error;

pub mod moving_averages;
pub mod statistics;

/// Errors that can occur in seasonal math calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for seasonal math operations
pub type Result<T> = std::result::Result<T, MathError>;

pub use moving_averages::{centered_moving_average, CenteredMovingAverage};
pub use statistics::{
    arg_max, arg_min, mean, population_std_dev, population_variance, relative_returns,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::InvalidInput("Window must be greater than zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid input: Window must be greater than zero"
        );
    }
}
