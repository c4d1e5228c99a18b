//! Cumulative sum of deviations from the segment mean.
//!
//! The range of the CUSUM sequence is the segment's shift statistic: the
//! further the cumulative deviation swings, the stronger the evidence that
//! the level of the data moved somewhere inside the segment.

use crate::error::Result;
use crate::utils::stats::{argmax, maxdiff, mean};

/// How the candidate changepoint is picked from a CUSUM sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftLocator {
    /// Index of the CUSUM maximum. Only downward level shifts push the
    /// maximum away from the ends of the sequence.
    CusumMax,
    /// Index of the greatest absolute cumulative deviation. Locates shifts
    /// in either direction.
    #[default]
    CusumAbsMax,
}

/// CUSUM sequence of `values`.
///
/// The result has `values.len() + 1` elements: `s[0] = 0` and
/// `s[i + 1] = s[i] + (values[i] - mean)`.
///
/// Values near `f64::MAX` overflow the sum behind the mean and yield non-finite
/// elements; the detection driver rejects such series up front.
///
/// # Example
/// ```
/// use anofox_changepoint::changepoint::cusum;
///
/// let s = cusum(&[1.0, 3.0]).unwrap();
/// assert_eq!(s, vec![0.0, -1.0, 0.0]);
/// ```
pub fn cusum(values: &[f64]) -> Result<Vec<f64>> {
    let m = mean(values)?;
    let mut s = Vec::with_capacity(values.len() + 1);
    let mut acc = 0.0;
    s.push(acc);
    for &x in values {
        acc += x - m;
        s.push(acc);
    }
    Ok(s)
}

/// Range of the CUSUM sequence (`maxdiff(cusum(values))`).
pub fn cusum_range(values: &[f64]) -> Result<f64> {
    maxdiff(&cusum(values)?)
}

/// Local index of the most likely shift inside `values`.
///
/// The index refers to the CUSUM sequence, so it lies in `0..=values.len()`.
/// Ties resolve to the earliest index.
pub fn locate_shift(values: &[f64], locator: ShiftLocator) -> Result<usize> {
    let s = cusum(values)?;
    match locator {
        ShiftLocator::CusumMax => argmax(&s),
        ShiftLocator::CusumAbsMax => {
            let magnitude: Vec<f64> = s.iter().map(|x| x.abs()).collect();
            argmax(&magnitude)
        }
    }
}
