//! Changepoint detection algorithms.
//!
//! Detects level shifts in a time-ordered series by combining a cumulative
//! sum (CUSUM) statistic with a bootstrap significance test, then bisecting
//! the series around every significant shift.
//!
//! # Components
//!
//! - **CUSUM**: cumulative deviations from the segment mean; their range is the shift statistic
//! - **Bootstrap**: compares the statistic against randomly reordered copies of the segment
//! - **Detection**: work-list bisection collecting changepoints in ascending order
//!
//! # Example
//!
//! ```
//! use anofox_changepoint::changepoint::{changepoint_detect, ChangepointConfig};
//!
//! // Create series with a level shift
//! let mut series = vec![0.0; 50];
//! series.extend(vec![10.0; 50]);
//!
//! let config = ChangepointConfig::new(0.95).iterations(500).seed(42);
//! let result = changepoint_detect(&series, &config).unwrap();
//!
//! // Should detect one changepoint at index 50
//! assert_eq!(result.changepoints, vec![50]);
//! ```

pub mod bootstrap;
pub mod cusum;
pub mod detect;

pub use bootstrap::{bootstrap, significance};
pub use cusum::{cusum, cusum_range, locate_shift, ShiftLocator};
pub use detect::{
    changepoint, changepoint_detect, changepoint_detect_with_rng, changepoint_with_iterations,
    ChangepointConfig, ChangepointResult, DEFAULT_CONFIDENCE, DEFAULT_ITERATIONS,
};
