//! Seed handling for reproducible runs.
//!
//! Every run owns a single `StdRng`. When the caller does not pin a seed one is
//! drawn from entropy, and the seed in use is reported alongside the outcome so
//! that a failing run can be replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for providing random number generators from a seed
pub trait RngProvider {
    /// The type of RNG this provider creates
    type Rng: rand::RngCore;

    /// Create a new RNG instance from the given seed
    fn create_rng(&self, seed: u64) -> Self::Rng;
}

/// Default RNG provider using `StdRng`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: u64) -> Self::Rng {
        StdRng::seed_from_u64(seed)
    }
}

/// Draw a fresh seed from the operating system's entropy source
pub fn fresh_seed() -> u64 {
    StdRng::from_entropy().r#gen()
}

/// Use the pinned seed if there is one, otherwise draw a fresh one
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(fresh_seed)
}

/// Create an RNG with a specific seed
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_seeded_rngs_agree() {
        let mut rng1 = create_seeded_rng(12345);
        let mut rng2 = create_seeded_rng(12345);

        for _ in 0..16 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = create_seeded_rng(1);
        let mut rng2 = create_seeded_rng(2);

        let first: Vec<u64> = (0..4).map(|_| rng1.next_u64()).collect();
        let second: Vec<u64> = (0..4).map(|_| rng2.next_u64()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_resolve_seed_prefers_pinned() {
        assert_eq!(resolve_seed(Some(99)), 99);
        // Unpinned seeds come from entropy; only check that resolution succeeds
        let _ = resolve_seed(None);
    }
}
