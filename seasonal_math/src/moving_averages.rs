//! Moving average calculation implementations
//!
//! Contains the centered moving average used to estimate the trend
//! component of a series. Near the edges of the series the window is
//! truncated instead of padded, so every point gets an average.

use crate::{MathError, Result};

/// Centered Moving Average with boundary shrinking
///
/// For a window `w`, the average at index `i` covers
/// `[i - floor(w/2), i + ceil(w/2))` clipped to the series bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredMovingAverage {
    window: usize,
}

impl CenteredMovingAverage {
    /// Create a new Centered Moving Average with the specified window
    pub fn new(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Window must be greater than zero".to_string(),
            ));
        }

        Ok(Self { window })
    }

    /// Get the configured window
    pub fn window(&self) -> usize {
        self.window
    }

    /// Bounds `[start, end)` of the averaging slice around `index`
    fn bounds(&self, index: usize, len: usize) -> (usize, usize) {
        let before = self.window / 2;
        let after = self.window - before;
        let start = index.saturating_sub(before);
        let end = (index + after).min(len);
        (start, end)
    }

    /// Apply the moving average to a series, one output per input
    pub fn apply(&self, values: &[f64]) -> Vec<f64> {
        (0..values.len())
            .map(|i| {
                let (start, end) = self.bounds(i, values.len());
                values[start..end].iter().sum::<f64>() / (end - start) as f64
            })
            .collect()
    }
}

/// Compute a centered moving average over `values`
pub fn centered_moving_average(values: &[f64], window: usize) -> Result<Vec<f64>> {
    Ok(CenteredMovingAverage::new(window)?.apply(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_window_rejected() {
        assert!(CenteredMovingAverage::new(0).is_err());
        assert!(centered_moving_average(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_window_shrinks_at_edges() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let ma = centered_moving_average(&values, 4).unwrap();

        assert_eq!(ma.len(), values.len());
        // [0, 2) at the left edge
        assert_relative_eq!(ma[0], 1.5);
        // [1, 5) in the middle
        assert_relative_eq!(ma[3], 3.5);
        // [3, 6) at the right edge
        assert_relative_eq!(ma[5], 5.0);
    }

    #[test]
    fn test_odd_window() {
        let values = [2.0, 4.0, 6.0, 8.0, 10.0];
        let ma = centered_moving_average(&values, 3).unwrap();

        // floor(3/2) = 1 before, ceil(3/2) = 2 after the index (exclusive)
        assert_relative_eq!(ma[0], 3.0);
        assert_relative_eq!(ma[2], 6.0);
        assert_relative_eq!(ma[4], 9.0);
    }

    #[test]
    fn test_window_of_one_is_identity() {
        let values = [5.0, 7.0, 9.0];
        let ma = centered_moving_average(&values, 1).unwrap();
        assert_eq!(ma, values.to_vec());
    }

    #[test]
    fn test_empty_input() {
        let ma = centered_moving_average(&[], 3).unwrap();
        assert!(ma.is_empty());
    }

    #[test]
    fn test_constant_series() {
        let values = [42.0; 12];
        let ma = centered_moving_average(&values, 6).unwrap();
        for v in ma {
            assert_relative_eq!(v, 42.0);
        }
    }
}
