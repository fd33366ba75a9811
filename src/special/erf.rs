//! Error function family
//!
//! Both functions are special cases of the regularized incomplete gamma
//! function: `erf(x) = sign(x) * P(1/2, x^2)`, so odd symmetry holds by
//! construction, and `erfc` evaluates the complementary term `Q(1/2, x^2)`
//! directly to keep precision in the large-`x` tail instead of cancelling
//! against 1. The inverses refine a rational initial approximation by
//! Newton-Raphson with the Gaussian density as the derivative.

use crate::error::{Result, convergence_failure, invalid_parameter};
use crate::special::Convergence;
use crate::special::gamma::{incomplete_gamma_p_with, incomplete_gamma_q_with};

/// `2 / sqrt(pi)`, the derivative of erf at zero
const TWO_OVER_SQRT_PI: f64 = 1.128_379_167_095_512_57;

/// Error function `erf(x)`, defined for all reals
///
/// # Errors
///
/// Returns [`crate::StatError::InvalidParameter`] for NaN input and
/// [`crate::StatError::ConvergenceFailure`] if the underlying incomplete gamma
/// evaluation exhausts its default iteration budget.
pub fn erf(x: f64) -> Result<f64> {
    erf_with(x, &Convergence::default())
}

/// Error function with explicit convergence settings
///
/// # Errors
///
/// Same failure conditions as [`erf`], with the iteration budget taken from
/// `convergence`.
pub fn erf_with(x: f64, convergence: &Convergence) -> Result<f64> {
    if x == 0.0 {
        return Ok(0.0);
    }
    let magnitude = incomplete_gamma_p_with(0.5, x * x, convergence)?;
    Ok(if x > 0.0 { magnitude } else { -magnitude })
}

/// Complementary error function `erfc(x) = 1 - erf(x)`
///
/// # Errors
///
/// Returns [`crate::StatError::InvalidParameter`] for NaN input and
/// [`crate::StatError::ConvergenceFailure`] if the underlying incomplete gamma
/// evaluation exhausts its default iteration budget.
pub fn erfc(x: f64) -> Result<f64> {
    erfc_with(x, &Convergence::default())
}

/// Complementary error function with explicit convergence settings
///
/// # Errors
///
/// Same failure conditions as [`erfc`], with the iteration budget taken from
/// `convergence`.
pub fn erfc_with(x: f64, convergence: &Convergence) -> Result<f64> {
    if x == 0.0 {
        return Ok(1.0);
    }
    if x > 0.0 {
        incomplete_gamma_q_with(0.5, x * x, convergence)
    } else {
        // erfc(-x) = 2 - erfc(x) = 1 + P(1/2, x^2)
        Ok(1.0 + incomplete_gamma_p_with(0.5, x * x, convergence)?)
    }
}

/// Inverse error function: returns `x` such that `erf(x) = p`
///
/// # Errors
///
/// Returns [`crate::StatError::InvalidParameter`] unless `-1 < p < 1`, and
/// [`crate::StatError::ConvergenceFailure`] if Newton refinement exhausts the
/// default iteration budget.
pub fn inverse_erf(p: f64) -> Result<f64> {
    inverse_erf_with(p, &Convergence::default())
}

/// Inverse error function with explicit convergence settings
///
/// # Errors
///
/// Same failure conditions as [`inverse_erf`], with the iteration budget taken
/// from `convergence`.
pub fn inverse_erf_with(p: f64, convergence: &Convergence) -> Result<f64> {
    if p.is_nan() || p <= -1.0 || p >= 1.0 {
        return Err(invalid_parameter(
            "p",
            &p,
            &"inverse erf is only defined on (-1, 1)",
        ));
    }
    inverse_erfc_with(1.0 - p, convergence)
}

/// Inverse complementary error function: returns `x` such that `erfc(x) = p`
///
/// # Errors
///
/// Returns [`crate::StatError::InvalidParameter`] unless `0 < p < 2`, and
/// [`crate::StatError::ConvergenceFailure`] if Newton refinement exhausts the
/// default iteration budget.
pub fn inverse_erfc(p: f64) -> Result<f64> {
    inverse_erfc_with(p, &Convergence::default())
}

/// Inverse complementary error function with explicit convergence settings
///
/// # Errors
///
/// Same failure conditions as [`inverse_erfc`], with the iteration budget
/// taken from `convergence`.
pub fn inverse_erfc_with(p: f64, convergence: &Convergence) -> Result<f64> {
    if p.is_nan() || p <= 0.0 || p >= 2.0 {
        return Err(invalid_parameter(
            "p",
            &p,
            &"inverse erfc is only defined on (0, 2)",
        ));
    }

    // Fold onto (0, 1] and restore the sign at the end
    let pp = if p < 1.0 { p } else { 2.0 - p };
    let t = (-2.0 * (pp / 2.0).ln()).sqrt();
    let mut x = -0.707_11 * ((2.307_53 + t * 0.270_61) / (1.0 + t * (0.992_29 + t * 0.044_81)) - t);

    // Quadratic convergence makes the achieved relative error the square of
    // the halting threshold, so halt at the square root of the tolerance
    let halt = convergence.tolerance.sqrt();
    for _ in 0..convergence.max_iterations {
        let error = erfc_with(x, convergence)? - pp;
        let step = error / TWO_OVER_SQRT_PI.mul_add((-x * x).exp(), -(x * error));
        x += step;
        if step.abs() <= halt * (1.0 + x.abs()) {
            return Ok(if p < 1.0 { x } else { -x });
        }
    }
    Err(convergence_failure("inverse erfc", convergence.max_iterations))
}
