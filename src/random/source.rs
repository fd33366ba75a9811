//! Seedable source of uniform randomness

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Deterministic, seedable source of uniform bits and doubles
///
/// Wraps the standard generator and owns its state exclusively. Reseeding
/// replaces that state deterministically: two sources given the same seed
/// produce identical subsequent sequences of any length. Instances are not
/// thread safe; state mutates on every call.
#[derive(Clone, Debug)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a source seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic source from the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Replace the generator state deterministically from the given seed
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Next double uniformly distributed in `[0, 1)`
    pub fn next_uniform_double(&mut self) -> f64 {
        self.rng.random()
    }

    /// Next raw 64 bits from the generator
    pub fn next_raw_bits(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for RandomSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}
