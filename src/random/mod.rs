//! Pseudo-random sources and typed samplers
//!
//! A [`RandomSource`] turns a seedable generator into uniform bits and
//! doubles; [`UniformRandomizer`] shapes those into bounded, typed samples and
//! [`GaussianRandomizer`] into mean/deviation-shaped ones. The shared
//! [`Randomizer`] contract covers the scalar draws and derives the bulk
//! variants from them.
//!
//! Every sampler mutates internal state on each call, so instances must be
//! confined to a single logical owner; concurrent use would corrupt the
//! sequence or duplicate values.

/// Gaussian-shaped sampling via the polar two-value transform
pub mod gaussian;
/// Seedable source of uniform bits and doubles
pub mod source;
/// Uniform scalar and bulk sampling over a random source
pub mod uniform;

pub use gaussian::GaussianRandomizer;
pub use source::RandomSource;
pub use uniform::UniformRandomizer;

use crate::error::{Result, invalid_parameter};

/// Common contract for generators producing typed samples from an owned
/// uniform source
///
/// The five scalar draws are required; bulk fills and allocate-and-fill
/// variants are provided in terms of them, so every implementor offers the
/// full surface.
pub trait Randomizer {
    /// Next boolean sample
    fn next_boolean(&mut self) -> bool;

    /// Next 32-bit integer sample
    fn next_i32(&mut self) -> i32;

    /// Next 64-bit integer sample
    fn next_i64(&mut self) -> i64;

    /// Next single precision sample
    fn next_f32(&mut self) -> f32;

    /// Next double precision sample
    fn next_f64(&mut self) -> f64;

    /// Fill the slice with boolean samples
    fn fill_booleans(&mut self, values: &mut [bool]) {
        for value in values {
            *value = self.next_boolean();
        }
    }

    /// Allocate and fill a vector of boolean samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length.
    fn next_booleans(&mut self, length: usize) -> Result<Vec<bool>> {
        validate_length(length)?;
        let mut values = vec![false; length];
        self.fill_booleans(&mut values);
        Ok(values)
    }

    /// Fill the slice with 32-bit integer samples
    fn fill_i32s(&mut self, values: &mut [i32]) {
        for value in values {
            *value = self.next_i32();
        }
    }

    /// Allocate and fill a vector of 32-bit integer samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length.
    fn next_i32s(&mut self, length: usize) -> Result<Vec<i32>> {
        validate_length(length)?;
        let mut values = vec![0_i32; length];
        self.fill_i32s(&mut values);
        Ok(values)
    }

    /// Fill the slice with 64-bit integer samples
    fn fill_i64s(&mut self, values: &mut [i64]) {
        for value in values {
            *value = self.next_i64();
        }
    }

    /// Allocate and fill a vector of 64-bit integer samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length.
    fn next_i64s(&mut self, length: usize) -> Result<Vec<i64>> {
        validate_length(length)?;
        let mut values = vec![0_i64; length];
        self.fill_i64s(&mut values);
        Ok(values)
    }

    /// Fill the slice with single precision samples
    fn fill_f32s(&mut self, values: &mut [f32]) {
        for value in values {
            *value = self.next_f32();
        }
    }

    /// Allocate and fill a vector of single precision samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length.
    fn next_f32s(&mut self, length: usize) -> Result<Vec<f32>> {
        validate_length(length)?;
        let mut values = vec![0.0_f32; length];
        self.fill_f32s(&mut values);
        Ok(values)
    }

    /// Fill the slice with double precision samples
    fn fill_f64s(&mut self, values: &mut [f64]) {
        for value in values {
            *value = self.next_f64();
        }
    }

    /// Allocate and fill a vector of double precision samples
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] for a zero length.
    fn next_f64s(&mut self, length: usize) -> Result<Vec<f64>> {
        validate_length(length)?;
        let mut values = vec![0.0_f64; length];
        self.fill_f64s(&mut values);
        Ok(values)
    }
}

/// Reject zero-length allocation requests
pub(crate) fn validate_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(invalid_parameter(
            "length",
            &length,
            &"requested sample count must be positive",
        ));
    }
    Ok(())
}

/// Reject probabilities and thresholds outside the unit interval
pub(crate) fn validate_probability(value: f64, parameter: &'static str) -> Result<()> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(invalid_parameter(
            parameter,
            &value,
            &"value must lie in [0, 1]",
        ));
    }
    Ok(())
}
