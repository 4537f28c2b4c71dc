//! The randomness the engine consumes.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random draws.
pub trait RandomSource {
    /// A uniform real number in `[0, 100)`.
    fn percent(&mut self) -> f64;

    /// A uniform index in `[0, len)`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn percent(&mut self) -> f64 {
        self.random_range(0.0..100.0)
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn draws_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = rng.percent();
            assert!((0.0..100.0).contains(&p));
            assert!(rng.index(3) < 3);
        }
    }

    #[test]
    fn seeded_draws_repeat() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(a.index(8), b.index(8));
        }
    }
}
