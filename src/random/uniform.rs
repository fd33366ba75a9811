//! Uniform scalar and bulk sampling
//!
//! Range-bounded draws are generic over every type the uniform sampler
//! supports, producing values in `[low, high)` with the strict ordering
//! `low < high` validated up front. Bulk variants either fill a caller-sized
//! slice or allocate a vector of a validated positive length.

use std::fmt::Display;

use num_traits::Zero;
use rand::Rng;
use rand::distr::uniform::SampleUniform;

use crate::error::{Result, invalid_parameter};
use crate::random::source::RandomSource;
use crate::random::{Randomizer, validate_length, validate_probability};

/// Generates uniformly distributed samples from an owned random source
#[derive(Clone, Debug)]
pub struct UniformRandomizer {
    source: RandomSource,
}

impl UniformRandomizer {
    /// Create a randomizer over the given source
    pub const fn new(source: RandomSource) -> Self {
        Self { source }
    }

    /// Create a randomizer over a deterministically seeded source
    pub fn with_seed(seed: u64) -> Self {
        Self::new(RandomSource::with_seed(seed))
    }

    /// Replace the underlying generator state deterministically
    pub fn set_seed(&mut self, seed: u64) {
        self.source.set_seed(seed);
    }

    /// Next boolean that is true with the given probability
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless the probability
    /// lies in `[0, 1]`.
    pub fn next_boolean_with_probability(&mut self, probability: f64) -> Result<bool> {
        validate_probability(probability, "probability")?;
        Ok(self.source.next_uniform_double() < probability)
    }

    /// Fill the slice with booleans true with the given probability
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless the probability
    /// lies in `[0, 1]`.
    pub fn fill_booleans_with_probability(
        &mut self,
        values: &mut [bool],
        probability: f64,
    ) -> Result<()> {
        validate_probability(probability, "probability")?;
        for value in values {
            *value = self.source.next_uniform_double() < probability;
        }
        Ok(())
    }

    /// Allocate and fill a vector of booleans true with the given probability
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length or a
    /// probability outside `[0, 1]`.
    pub fn next_booleans_with_probability(
        &mut self,
        length: usize,
        probability: f64,
    ) -> Result<Vec<bool>> {
        validate_length(length)?;
        let mut values = vec![false; length];
        self.fill_booleans_with_probability(&mut values, probability)?;
        Ok(values)
    }

    /// Next sample uniformly distributed in `[low, high)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `low < high`.
    pub fn next_in_range<T>(&mut self, low: T, high: T) -> Result<T>
    where
        T: SampleUniform + PartialOrd + Display + Copy,
    {
        validate_range(low, high)?;
        Ok(self.source.random_range(low..high))
    }

    /// Next sample uniformly distributed in `[0, max_value)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `max_value > 0`.
    pub fn next_up_to<T>(&mut self, max_value: T) -> Result<T>
    where
        T: SampleUniform + PartialOrd + Display + Copy + Zero,
    {
        self.next_in_range(T::zero(), max_value)
    }

    /// Fill every slot with samples uniformly distributed in `[low, high)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `low < high`.
    pub fn fill_range<T>(&mut self, values: &mut [T], low: T, high: T) -> Result<()>
    where
        T: SampleUniform + PartialOrd + Display + Copy,
    {
        validate_range(low, high)?;
        for value in values {
            *value = self.source.random_range(low..high);
        }
        Ok(())
    }

    /// Fill every slot with samples uniformly distributed in `[0, max_value)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `max_value > 0`.
    pub fn fill_up_to<T>(&mut self, values: &mut [T], max_value: T) -> Result<()>
    where
        T: SampleUniform + PartialOrd + Display + Copy + Zero,
    {
        self.fill_range(values, T::zero(), max_value)
    }

    /// Allocate and fill a vector of samples uniform in `[low, high)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length or
    /// unless `low < high`.
    pub fn next_vec_in_range<T>(&mut self, length: usize, low: T, high: T) -> Result<Vec<T>>
    where
        T: SampleUniform + PartialOrd + Display + Copy,
    {
        validate_length(length)?;
        validate_range(low, high)?;
        Ok((0..length)
            .map(|_| self.source.random_range(low..high))
            .collect())
    }

    /// Allocate and fill a vector of samples uniform in `[0, max_value)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length or
    /// unless `max_value > 0`.
    pub fn next_vec_up_to<T>(&mut self, length: usize, max_value: T) -> Result<Vec<T>>
    where
        T: SampleUniform + PartialOrd + Display + Copy + Zero,
    {
        self.next_vec_in_range(length, T::zero(), max_value)
    }
}

impl Randomizer for UniformRandomizer {
    fn next_boolean(&mut self) -> bool {
        self.source.next_raw_bits() & 1 == 1
    }

    fn next_i32(&mut self) -> i32 {
        rand::RngCore::next_u32(&mut self.source) as i32
    }

    fn next_i64(&mut self) -> i64 {
        self.source.next_raw_bits() as i64
    }

    fn next_f32(&mut self) -> f32 {
        self.source.random()
    }

    fn next_f64(&mut self) -> f64 {
        self.source.next_uniform_double()
    }
}

/// Reject ranges whose lower bound does not strictly precede the upper one
fn validate_range<T>(low: T, high: T) -> Result<()>
where
    T: PartialOrd + Display,
{
    if low < high {
        Ok(())
    } else {
        Err(invalid_parameter(
            "low",
            &format!("{low}"),
            &format!("range requires low < high (high = {high})"),
        ))
    }
}
