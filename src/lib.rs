//! # anofox-changepoint
//!
//! Changepoint detection for one-dimensional, time-ordered series.
//!
//! Finds the indexes where the level of a series shifts, using a cumulative
//! sum (CUSUM) statistic and a non-parametric bootstrap significance test,
//! applied recursively to the sub-segments on either side of each shift.

#![allow(clippy::needless_range_loop)]

pub mod changepoint;
pub mod error;
pub mod utils;

pub use error::{ChangepointError, Result};

pub mod prelude {
    pub use crate::changepoint::{
        changepoint, changepoint_detect, changepoint_detect_with_rng, changepoint_with_iterations,
        ChangepointConfig, ChangepointResult, ShiftLocator,
    };
    pub use crate::error::{ChangepointError, Result};
}
