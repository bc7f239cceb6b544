//! Injectable randomness for default replies and reply pacing.
//!
//! Production uses `ThreadRandom`; tests pin the outcome with `SeededRandom`
//! or `FixedRandom`.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed integers.
pub trait RandomSource: Send + Sync {
    /// Returns a value in `0..upper`. `upper` must be non-zero.
    fn below(&self, upper: u64) -> u64;
}

/// Thread-local OS-seeded generator.
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, upper: u64) -> u64 {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Deterministic generator for reproducible sequences.
pub struct SeededRandom(Mutex<StdRng>);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(Mutex::new(StdRng::seed_from_u64(seed)))
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, upper: u64) -> u64 {
        match self.0.lock() {
            Ok(mut rng) => rng.gen_range(0..upper),
            Err(poisoned) => poisoned.into_inner().gen_range(0..upper),
        }
    }
}

/// Always returns the same value, clamped into range.
#[cfg(test)]
pub struct FixedRandom(pub u64);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn below(&self, upper: u64) -> u64 {
        self.0.min(upper.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for _ in 0..1_000 {
            assert!(rng.below(4) < 4);
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let xs: Vec<u64> = (0..16).map(|_| a.below(100)).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.below(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_fixed_random_clamps() {
        assert_eq!(FixedRandom(2).below(4), 2);
        assert_eq!(FixedRandom(9).below(4), 3);
    }
}
