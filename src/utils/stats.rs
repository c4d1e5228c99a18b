//! Vector primitives used by the CUSUM engine.
//!
//! Every function rejects an empty slice with [`ChangepointError::EmptyData`]
//! instead of producing an undefined numeric result.

use crate::error::{ChangepointError, Result};

#[inline]
fn non_empty(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(ChangepointError::EmptyData);
    }
    Ok(())
}

/// Calculate the arithmetic mean of a slice.
///
/// # Example
/// ```
/// use anofox_changepoint::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(values: &[f64]) -> Result<f64> {
    non_empty(values)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Smallest value of a slice.
pub fn min(values: &[f64]) -> Result<f64> {
    non_empty(values)?;
    let mut x = values[0];
    for &y in &values[1..] {
        if y < x {
            x = y;
        }
    }
    Ok(x)
}

/// Largest value of a slice.
pub fn max(values: &[f64]) -> Result<f64> {
    non_empty(values)?;
    let mut x = values[0];
    for &y in &values[1..] {
        if y > x {
            x = y;
        }
    }
    Ok(x)
}

/// Both extrema in a single pass, returned as `(min, max)`.
pub fn minmax(values: &[f64]) -> Result<(f64, f64)> {
    non_empty(values)?;
    let (mut lo, mut hi) = (values[0], values[0]);
    for &y in &values[1..] {
        if y < lo {
            lo = y;
        }
        if y > hi {
            hi = y;
        }
    }
    Ok((lo, hi))
}

/// Index of the first occurrence of the minimum.
pub fn argmin(values: &[f64]) -> Result<usize> {
    non_empty(values)?;
    let mut x = 0;
    for i in 1..values.len() {
        if values[i] < values[x] {
            x = i;
        }
    }
    Ok(x)
}

/// Index of the first occurrence of the maximum.
///
/// Ties keep the lower index: a later equal value never replaces the
/// current winner.
pub fn argmax(values: &[f64]) -> Result<usize> {
    non_empty(values)?;
    let mut x = 0;
    for i in 1..values.len() {
        if values[i] > values[x] {
            x = i;
        }
    }
    Ok(x)
}

/// Range of a slice: `max - min`.
pub fn maxdiff(values: &[f64]) -> Result<f64> {
    let (lo, hi) = minmax(values)?;
    Ok(hi - lo)
}
