//! Normal distribution
//!
//! Evaluation goes through the error function family, with the complementary
//! form used for the cumulative distribution so tail values keep precision.
//! First-order uncertainty propagation pushes the distribution through a
//! differentiable scalar transform by the delta method: linearize at the mean
//! and scale the deviation by the derivative magnitude.

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2, TAU};

use crate::error::{Result, invalid_parameter};
use crate::special::erf::{erfc, inverse_erfc};

/// `1 / sqrt(2 * pi)`, normalizing the Gaussian density to unit mass
const GAUSSIAN_NORM: f64 = 0.398_942_280_401_432_68;

/// Normal (Gaussian) distribution with mean and standard deviation
///
/// The standard deviation is validated to be positive at construction and on
/// every mutation. The default instance is the standard normal `N(0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normal {
    /// Mean of the distribution
    mean: f64,
    /// Standard deviation of the distribution
    standard_deviation: f64,
}

impl Default for Normal {
    fn default() -> Self {
        Self {
            mean: 0.0,
            standard_deviation: 1.0,
        }
    }
}

impl Normal {
    /// Create a distribution with the given mean and standard deviation
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless
    /// `standard_deviation > 0`.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Self> {
        validate_standard_deviation(standard_deviation)?;
        Ok(Self {
            mean,
            standard_deviation,
        })
    }

    /// Mean of the distribution
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the distribution
    pub const fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Variance of the distribution
    pub const fn variance(&self) -> f64 {
        self.standard_deviation * self.standard_deviation
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
    /// `standard_deviation > 0`; the distribution is left unchanged on failure.
    pub fn set_standard_deviation(&mut self, standard_deviation: f64) -> Result<()> {
        validate_standard_deviation(standard_deviation)?;
        self.standard_deviation = standard_deviation;
        Ok(())
    }

    /// Replace the variance
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `variance > 0`.
    pub fn set_variance(&mut self, variance: f64) -> Result<()> {
        if variance.is_nan() || variance <= 0.0 {
            return Err(invalid_parameter(
                "variance",
                &variance,
                &"variance must be positive",
            ));
        }
        self.standard_deviation = variance.sqrt();
        Ok(())
    }

    /// Probability density function at `x`
    pub fn pdf(&self, x: f64) -> f64 {
        let deviate = (x - self.mean) / self.standard_deviation;
        (GAUSSIAN_NORM / self.standard_deviation) * (-0.5 * deviate * deviate).exp()
    }

    /// Cumulative distribution function at `x`
    ///
    /// Evaluated as `erfc(-(x - mean) / (sd * sqrt(2))) / 2` so both tails keep
    /// full precision.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::ConvergenceFailure`] if the underlying
    /// error function evaluation exhausts its iteration budget.
    pub fn cdf(&self, x: f64) -> Result<f64> {
        let deviate = (x - self.mean) / self.standard_deviation;
        Ok(0.5 * erfc(-FRAC_1_SQRT_2 * deviate)?)
    }

    /// Inverse cumulative distribution function at probability `p`
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] unless `0 < p < 1`, and
    /// [`crate::StatError::ConvergenceFailure`] if the underlying inverse
    /// error function exhausts its iteration budget.
    pub fn inverse_cdf(&self, p: f64) -> Result<f64> {
        if p.is_nan() || p <= 0.0 || p >= 1.0 {
            return Err(invalid_parameter(
                "p",
                &p,
                &"probability must lie strictly between 0 and 1",
            ));
        }
        Ok((-SQRT_2 * self.standard_deviation).mul_add(inverse_erfc(2.0 * p)?, self.mean))
    }

    /// Mahalanobis distance of `x`: deviation from the mean in units of
    /// standard deviation
    pub const fn mahalanobis_distance(&self, x: f64) -> f64 {
        (x - self.mean).abs() / self.standard_deviation
    }

    /// First-order propagation of this distribution through a scalar transform
    ///
    /// Delta-method approximation: the propagated mean is the transform
    /// evaluated at the current mean and the propagated standard deviation is
    /// the current one scaled by the derivative magnitude at the mean. The
    /// linearization is only accurate while the standard deviation is small
    /// relative to the transform's curvature.
    ///
    /// # Errors
    ///
    /// Returns [`crate::StatError::InvalidParameter`] when the derivative
    /// vanishes at the mean, since the propagated distribution would collapse
    /// to zero deviation.
    pub fn propagate(&self, transform: &impl Differentiable) -> Result<Self> {
        let mean = transform.value(self.mean);
        let standard_deviation =
            transform.derivative(self.mean).abs() * self.standard_deviation;
        Self::new(mean, standard_deviation)
    }
}

/// Validate a standard deviation argument
fn validate_standard_deviation(standard_deviation: f64) -> Result<()> {
    if standard_deviation.is_nan() || standard_deviation <= 0.0 {
        return Err(invalid_parameter(
            "standard_deviation",
            &standard_deviation,
            &"standard deviation must be positive",
        ));
    }
    Ok(())
}

/// A scalar transform that can be evaluated and differentiated at a point
pub trait Differentiable {
    /// Value of the transform at `x`
    fn value(&self, x: f64) -> f64;

    /// First derivative of the transform at `x`
    fn derivative(&self, x: f64) -> f64;
}

/// Polynomial transform specified by coefficients in ascending degree order
///
/// `coefficients[k]` multiplies `x^k`; an empty coefficient list is the zero
/// polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in ascending degree order
    pub const fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }
}

impl Differentiable for Polynomial {
    fn value(&self, x: f64) -> f64 {
        // Horner evaluation from the highest degree down
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |accumulated, coefficient| {
                accumulated.mul_add(x, *coefficient)
            })
    }

    fn derivative(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |accumulated, (degree, coefficient)| {
                accumulated.mul_add(x, degree as f64 * coefficient)
            })
    }
}

/// Sinusoidal transform `amplitude * sin(angular_frequency * x + phase)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sinusoid {
    amplitude: f64,
    angular_frequency: f64,
    phase: f64,
}

impl Sinusoid {
    /// Create a sinusoid from amplitude, ordinary frequency and phase
    pub const fn new(amplitude: f64, frequency: f64, phase: f64) -> Self {
        Self {
            amplitude,
            angular_frequency: TAU * frequency,
            phase,
        }
    }

    /// Create a sinusoid directly from its angular frequency
    pub const fn with_angular_frequency(
        amplitude: f64,
        angular_frequency: f64,
        phase: f64,
    ) -> Self {
        Self {
            amplitude,
            angular_frequency,
            phase,
        }
    }
}

impl Differentiable for Sinusoid {
    fn value(&self, x: f64) -> f64 {
        self.amplitude * self.angular_frequency.mul_add(x, self.phase).sin()
    }

    fn derivative(&self, x: f64) -> f64 {
        self.amplitude
            * self.angular_frequency
            * self.angular_frequency.mul_add(x, self.phase).cos()
    }
}
