//! Recursive bisection driver for CUSUM/bootstrap changepoint detection.
//!
//! The series is analysed as a stack of pending segments. Each segment whose
//! shift statistic passes the bootstrap test contributes one changepoint and
//! is split there; the two halves go back on the stack. Processing stops once
//! the stack is empty.

use std::collections::BTreeSet;

use log::{debug, log_enabled, Level};
use rand::Rng;

use super::bootstrap::significance;
use super::cusum::{locate_shift, ShiftLocator};
use crate::error::{ChangepointError, Result};
use crate::utils::random::seeded_rng;

/// Default number of bootstrap reshuffles per segment.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Default confidence threshold.
pub const DEFAULT_CONFIDENCE: f64 = 0.9;

/// Configuration for changepoint detection.
#[derive(Debug, Clone)]
pub struct ChangepointConfig {
    /// Threshold on the bootstrap significance, in (0.0, 1.0]
    pub confidence: f64,
    /// Bootstrap reshuffles per segment
    pub iterations: usize,
    /// Random seed for reproducibility (None for random)
    pub seed: Option<u64>,
    /// Rule for placing the changepoint inside a significant segment
    pub locator: ShiftLocator,
}

impl Default for ChangepointConfig {
    fn default() -> Self {
        Self {
            confidence: DEFAULT_CONFIDENCE,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            locator: ShiftLocator::default(),
        }
    }
}

impl ChangepointConfig {
    /// Create a new config with the given confidence threshold.
    pub fn new(confidence: f64) -> Self {
        Self {
            confidence,
            ..Default::default()
        }
    }

    /// Set the confidence threshold.
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Set the number of bootstrap reshuffles.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the shift locator.
    pub fn locator(mut self, locator: ShiftLocator) -> Self {
        self.locator = locator;
        self
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> Result<()> {
        // Negated form so that NaN is rejected as well.
        if !(self.confidence > 0.0 && self.confidence <= 1.0) {
            return Err(ChangepointError::InvalidParameter(format!(
                "confidence must be > 0.0 and <= 1.0, got {}",
                self.confidence
            )));
        }
        if self.iterations == 0 {
            return Err(ChangepointError::InvalidParameter(
                "iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of changepoint detection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangepointResult {
    /// Detected changepoint indices, ascending and unique
    pub changepoints: Vec<usize>,
    /// Number of changepoints
    pub n_changepoints: usize,
    /// Number of segments taken off the work-list
    pub iterations_processed: usize,
}

impl ChangepointResult {
    /// Contiguous `(start, end)` segments of a series of length `n`, split at
    /// the changepoints.
    pub fn segments(&self, n: usize) -> Vec<(usize, usize)> {
        let mut segments = Vec::with_capacity(self.changepoints.len() + 1);
        let mut start = 0;
        for &cp in &self.changepoints {
            if cp > start && cp < n {
                segments.push((start, cp));
                start = cp;
            }
        }
        segments.push((start, n));
        segments
    }

    /// Get segment means.
    pub fn segment_means(&self, series: &[f64]) -> Vec<f64> {
        self.segments(series.len())
            .iter()
            .map(|&(start, end)| {
                let segment = &series[start..end];
                if segment.is_empty() {
                    f64::NAN
                } else {
                    segment.iter().sum::<f64>() / segment.len() as f64
                }
            })
            .collect()
    }
}

/// Pending sub-range of the series.
///
/// `offset` is the global index that a local CUSUM index of zero maps to.
#[derive(Debug)]
struct Segment {
    data: Vec<f64>,
    offset: usize,
}

/// Detect changepoints with the default number of iterations.
///
/// # Example
/// ```
/// use anofox_changepoint::changepoint::changepoint;
///
/// let mut series = vec![0.0; 50];
/// series.extend(vec![10.0; 50]);
///
/// let cps = changepoint(&series, 0.9).unwrap();
/// assert_eq!(cps, vec![50]);
/// ```
pub fn changepoint(data: &[f64], confidence: f64) -> Result<Vec<usize>> {
    changepoint_with_iterations(data, confidence, DEFAULT_ITERATIONS)
}

/// Detect changepoints with an explicit number of bootstrap iterations.
pub fn changepoint_with_iterations(
    data: &[f64],
    confidence: f64,
    iterations: usize,
) -> Result<Vec<usize>> {
    let config = ChangepointConfig::new(confidence).iterations(iterations);
    Ok(changepoint_detect(data, &config)?.changepoints)
}

/// Detect changepoints, drawing randomness from the config seed.
pub fn changepoint_detect(data: &[f64], config: &ChangepointConfig) -> Result<ChangepointResult> {
    let mut rng = seeded_rng(config.seed);
    changepoint_detect_with_rng(data, config, &mut rng)
}

/// Detect changepoints using a caller-supplied random source.
///
/// The config seed is ignored; `rng` drives every bootstrap reshuffle.
pub fn changepoint_detect_with_rng<R: Rng + ?Sized>(
    data: &[f64],
    config: &ChangepointConfig,
    rng: &mut R,
) -> Result<ChangepointResult> {
    config.validate()?;
    if data.is_empty() {
        return Err(ChangepointError::EmptyData);
    }
    if let Some(index) = data.iter().position(|x| !x.is_finite()) {
        return Err(ChangepointError::NonFiniteData { index });
    }
    // Any sum of at most 2n magnitudes, in any order, must stay finite.
    let limit = f64::MAX / (2.0 * data.len() as f64);
    if data.iter().any(|x| x.abs() > limit) {
        return Err(ChangepointError::InvalidParameter(format!(
            "values must not exceed {:e} in magnitude for a series of length {}",
            limit,
            data.len()
        )));
    }

    let n = data.len();
    let mut found: BTreeSet<usize> = BTreeSet::new();
    let mut stack = vec![Segment {
        data: data.to_vec(),
        offset: 0,
    }];
    let mut processed = 0;

    while let Some(segment) = stack.pop() {
        processed += 1;

        let p = significance(&segment.data, config.iterations, rng)?;
        if p <= config.confidence {
            continue;
        }

        let local = locate_shift(&segment.data, config.locator)?;
        let global = local + segment.offset;
        if global >= n || !found.insert(global) {
            continue;
        }

        if local > 0 && local < segment.data.len() {
            let (left, right) = segment.data.split_at(local);
            stack.push(Segment {
                data: left.to_vec(),
                offset: segment.offset,
            });
            // The right half's local index 0 is the changepoint shifted back by one.
            stack.push(Segment {
                data: right.to_vec(),
                offset: global - 1,
            });
        }
    }

    if log_enabled!(Level::Debug) {
        debug!(
            "data length: {}, confidence: {:.2}, iterations: {}, paths: {}",
            n, config.confidence, config.iterations, processed
        );
    }

    let changepoints: Vec<usize> = found.into_iter().collect();
    Ok(ChangepointResult {
        n_changepoints: changepoints.len(),
        changepoints,
        iterations_processed: processed,
    })
}
