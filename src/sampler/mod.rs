//! Random selection without replacement
//!
//! Selection is a partial Fisher-Yates shuffle (`SliceRandom::partial_shuffle`),
//! so every ordered subset of the requested size is equally likely.

use rand::Rng;
use rand::seq::SliceRandom;

/// Clamp a requested count to `[1, available]`, or 0 when nothing is available
pub fn clamp_quantity(requested: usize, available: usize) -> usize {
    requested.max(1).min(available)
}

/// Parse a user-entered quantity; anything that is not a positive integer becomes 1
pub fn parse_quantity(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// Pick up to `requested` distinct items in random order using the thread RNG
pub fn sample<T: Clone>(items: &[T], requested: usize) -> Vec<T> {
    sample_with(items, requested, &mut rand::thread_rng())
}

/// Pick up to `requested` distinct items in random order using `rng`
///
/// Returns `clamp_quantity(requested, items.len())` items. The input is not modified.
pub fn sample_with<T, R>(items: &[T], requested: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let amount = clamp_quantity(requested, items.len());
    if amount == 0 {
        return Vec::new();
    }

    let mut pool = items.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, amount);
    picked.to_vec()
}
