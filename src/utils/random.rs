//! Random permutation helpers.

use rand::prelude::*;

/// Build a `StdRng`, seeded for reproducibility or from OS entropy.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Shuffle a slice in place (Fisher-Yates) and hand the same slice back.
///
/// # Example
/// ```
/// use anofox_changepoint::utils::shuffle;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut data = vec![1.0, 2.0, 3.0, 4.0];
/// shuffle(&mut data, &mut rng);
///
/// let mut sorted = data.clone();
/// sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn shuffle<'a, R: Rng + ?Sized>(values: &'a mut [f64], rng: &mut R) -> &'a mut [f64] {
    for i in (2..=values.len()).rev() {
        let j = rng.gen_range(0..i);
        values.swap(j, i - 1);
    }
    values
}

/// Shuffle in place using a private, entropy-seeded generator.
pub fn shuffle_default(values: &mut [f64]) -> &mut [f64] {
    let mut rng = seeded_rng(None);
    shuffle(values, &mut rng)
}
