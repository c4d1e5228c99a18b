//! Bootstrap significance test for the CUSUM shift statistic.
//!
//! The observed CUSUM range is compared with the ranges of randomly
//! reordered copies of the same values. When reordering almost always
//! shrinks the range, the order of the data matters and a level shift is
//! likely.

use super::cusum::cusum_range;
use crate::error::{ChangepointError, Result};
use crate::utils::random::shuffle;
use rand::Rng;

/// Count the reshuffles whose CUSUM range is strictly below the observed one.
///
/// The result lies in `0..=iterations`. A series with zero variance always
/// returns 0, since no reordering can produce a range below zero.
///
/// # Example
/// ```
/// use anofox_changepoint::changepoint::bootstrap;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut data = vec![0.0; 20];
/// data.extend(vec![5.0; 20]);
///
/// let count = bootstrap(&data, 200, &mut rng).unwrap();
/// assert!(count > 190);
/// ```
pub fn bootstrap<R: Rng + ?Sized>(data: &[f64], iterations: usize, rng: &mut R) -> Result<usize> {
    let observed = cusum_range(data)?;

    let mut scratch = data.to_vec();
    let mut n = 0;
    for _ in 0..iterations {
        scratch.copy_from_slice(data);
        let diff = cusum_range(shuffle(&mut scratch, rng))?;
        if diff < observed {
            n += 1;
        }
    }
    Ok(n)
}

/// Empirical significance of the shift statistic: `bootstrap / iterations`.
///
/// This approximates the probability that a random reordering yields a
/// smaller CUSUM range than the observed order.
pub fn significance<R: Rng + ?Sized>(data: &[f64], iterations: usize, rng: &mut R) -> Result<f64> {
    if iterations == 0 {
        return Err(ChangepointError::InvalidParameter(
            "iterations must be positive".to_string(),
        ));
    }
    let count = bootstrap(data, iterations, rng)?;
    Ok(count as f64 / iterations as f64)
}
