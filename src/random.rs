//! Seeded random number supply.
//!
//! Every stochastic decision in the engine draws from a [`RandomStream`].
//! Streams can only be obtained from a [`RandomSource`], which is always
//! seeded, so an unseeded draw cannot be expressed through the engine's
//! interfaces. Each logical run asks the source for its own stream once
//! and keeps it for the whole run.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run-scoped supplier of reproducible random streams.
///
/// Streams for different run identifiers are independent; streams for
/// the same seed and run identifier produce the same draw sequence.
///
/// # Examples
///
/// ```
/// use u_vns::random::RandomSource;
/// use rand::Rng;
///
/// let source = RandomSource::new(42);
/// let a: u64 = source.stream(0).random();
/// let b: u64 = source.stream(0).random();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSource {
    seed: u64,
}

impl RandomSource {
    /// Creates a source for the given base seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Base seed of this source.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the stream for a run (repetition, thread, trial...).
    pub fn stream(&self, run: u64) -> RandomStream {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(run);
        RandomStream { rng }
    }
}

/// Deterministic random stream handed to stochastic components.
#[derive(Debug, Clone)]
pub struct RandomStream {
    rng: ChaCha8Rng,
}

impl RandomStream {
    /// Uniform index in `0..len`, or `None` when `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.random_range(0..len))
        }
    }
}

impl RngCore for RandomStream {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let source = RandomSource::new(7);
        let mut a = source.stream(3);
        let mut b = source.stream(3);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_runs_are_independent() {
        let source = RandomSource::new(7);
        let a: Vec<u64> = {
            let mut s = source.stream(0);
            (0..8).map(|_| s.next_u64()).collect()
        };
        let b: Vec<u64> = {
            let mut s = source.stream(1);
            (0..8).map(|_| s.next_u64()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn test_index_bounds() {
        let mut stream = RandomSource::new(1).stream(0);
        assert_eq!(stream.index(0), None);
        for _ in 0..1000 {
            let i = stream.index(5).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn test_rng_extension_methods() {
        let mut stream = RandomSource::new(99).stream(0);
        let x: f64 = stream.random_range(0.0..1.0);
        assert!((0.0..1.0).contains(&x));
    }
}
