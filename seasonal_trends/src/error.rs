//! Error types for the seasonal_trends crate

use seasonal_math::MathError;
use thiserror::Error;

/// Custom error types for the seasonal_trends crate
#[derive(Debug, Error)]
pub enum TrendsError {
    /// Error from invalid parameters or options
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// The historical series supplier failed
    #[error("Supplier error: {0}")]
    Supplier(String),

    /// The cache store failed
    #[error("Cache error: {0}")]
    Cache(String),

    /// A spawned report computation did not complete
    #[error("Task error: {0}")]
    Task(String),

    /// Error from the numeric kernel
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error encoding or decoding a cached report
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error reading CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, TrendsError>;
