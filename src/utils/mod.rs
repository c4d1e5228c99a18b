//! Utility functions shared by the changepoint detectors.

pub mod random;
pub mod stats;

pub use random::{seeded_rng, shuffle, shuffle_default};
pub use stats::{argmax, argmin, max, maxdiff, mean, min, minmax};
