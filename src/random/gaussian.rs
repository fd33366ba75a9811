//! Gaussian-shaped sampling
//!
//! Standard normal deviates come from the polar two-value transform: uniform
//! pairs are rejected until they land strictly inside the unit disk, then both
//! shaped values are recovered from one accepted pair. The second value is
//! cached and served by the next draw, so consecutive draws alternate between
//! computing and consuming; reseeding discards any cached value to keep the
//! sequence a pure function of the seed.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::error::{Result, invalid_parameter};
use crate::random::uniform::UniformRandomizer;
use crate::random::{Randomizer, validate_length, validate_probability};
use crate::special::erf::erfc;

/// Generates Gaussian-distributed samples from an owned uniform randomizer
#[derive(Clone, Debug)]
pub struct GaussianRandomizer {
    uniform: UniformRandomizer,
    mean: f64,
    standard_deviation: f64,
    /// Second deviate of the last polar pair, pending consumption
    spare: Option<f64>,
}

impl GaussianRandomizer {
    /// Create a standard normal randomizer over the given uniform randomizer
    pub const fn new(uniform: UniformRandomizer) -> Self {
        Self {
            uniform,
            mean: 0.0,
            standard_deviation: 1.0,
            spare: None,
        }
    }

    /// Create a randomizer with the given mean and standard deviation
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless
    /// `standard_deviation > 0`.
    pub fn with_parameters(
        uniform: UniformRandomizer,
        mean: f64,
        standard_deviation: f64,
    ) -> Result<Self> {
        let mut randomizer = Self::new(uniform);
        randomizer.set_mean(mean);
        randomizer.set_standard_deviation(standard_deviation)?;
        Ok(randomizer)
    }

    /// Create a standard normal randomizer over a deterministically seeded
    /// source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(UniformRandomizer::with_seed(seed))
    }

    /// Mean of the generated samples
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the generated samples
    pub const fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Replace the mean
    pub const fn set_mean(&mut self, mean: f64) {
        self.mean = mean;
    }

    /// Replace the standard deviation
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless
    /// `standard_deviation > 0`; the randomizer is left unchanged on failure.
    pub fn set_standard_deviation(&mut self, standard_deviation: f64) -> Result<()> {
        if standard_deviation.is_nan() || standard_deviation <= 0.0 {
            return Err(invalid_parameter(
                "standard_deviation",
                &standard_deviation,
                &"standard deviation must be positive",
            ));
        }
        self.standard_deviation = standard_deviation;
        Ok(())
    }

    /// Replace the underlying generator state deterministically
    ///
    /// Any cached second deviate is discarded so the subsequent sequence
    /// depends on the seed alone.
    pub fn set_seed(&mut self, seed: u64) {
        self.uniform.set_seed(seed);
        self.spare = None;
    }

    /// Next boolean that is true when the shaped sample falls below the
    /// given quantile
    ///
    /// The sample is reduced to its standard normal cumulative probability and
    /// compared against `threshold`, so a threshold of one half splits draws
    /// evenly around the mean regardless of the configured parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless the threshold
    /// lies in `[0, 1]`.
    pub fn next_boolean_with_threshold(&mut self, threshold: f64) -> Result<bool> {
        validate_probability(threshold, "threshold")?;
        let probability = 0.5 * erfc(-FRAC_1_SQRT_2 * self.next_standard())?;
        Ok(probability < threshold)
    }

    /// Fill the slice with booleans drawn against the given quantile threshold
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless the threshold
    /// lies in `[0, 1]`.
    pub fn fill_booleans_with_threshold(
        &mut self,
        values: &mut [bool],
        threshold: f64,
    ) -> Result<()> {
        validate_probability(threshold, "threshold")?;
        for value in values {
            let probability = 0.5 * erfc(-FRAC_1_SQRT_2 * self.next_standard())?;
            *value = probability < threshold;
        }
        Ok(())
    }

    /// Allocate and fill a vector of booleans drawn against the given
    /// quantile threshold
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length or a
    /// threshold outside `[0, 1]`.
    pub fn next_booleans_with_threshold(
        &mut self,
        length: usize,
        threshold: f64,
    ) -> Result<Vec<bool>> {
        validate_length(length)?;
        let mut values = vec![false; length];
        self.fill_booleans_with_threshold(&mut values, threshold)?;
        Ok(values)
    }

    /// Next standard normal deviate via the polar transform
    fn next_standard(&mut self) -> f64 {
        if let Some(value) = self.spare.take() {
            return value;
        }
        loop {
            let u = 2.0_f64.mul_add(self.uniform.next_f64(), -1.0);
            let v = 2.0_f64.mul_add(self.uniform.next_f64(), -1.0);
            let squared_norm = u.mul_add(u, v * v);
            if squared_norm > 0.0 && squared_norm < 1.0 {
                let factor = (-2.0 * squared_norm.ln() / squared_norm).sqrt();
                self.spare = Some(v * factor);
                return u * factor;
            }
        }
    }
}

impl Randomizer for GaussianRandomizer {
    fn next_boolean(&mut self) -> bool {
        self.next_standard() < 0.0
    }

    fn next_i32(&mut self) -> i32 {
        self.next_f64() as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.next_f64() as i64
    }

    fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    fn next_f64(&mut self) -> f64 {
        self.standard_deviation
            .mul_add(self.next_standard(), self.mean)
    }
}
