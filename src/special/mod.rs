//! Special mathematical functions
//!
//! Pure numeric leaves of the crate: the gamma family and the error function
//! family built on top of it. Every function here is stateless and touches only
//! its arguments and read-only constants, so concurrent use needs no
//! synchronization.

/// Error function family expressed through the incomplete gamma functions
pub mod erf;
/// Log-gamma, incomplete gamma functions and their inverses
pub mod gamma;
/// Fixed Gauss-Legendre abscissas and weights for the large-parameter path
mod quadrature;

/// Iteration and tolerance settings shared by every iterative routine
///
/// Defaults reproduce the documented behavior of the reference algorithms.
/// Iterative functions accept an explicit `Convergence` through their `*_with`
/// variants; the plain variants use [`Convergence::default`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Convergence {
    /// Maximum number of refinement iterations before failure is reported
    pub max_iterations: usize,
    /// Relative change at which successive refinements count as converged
    pub tolerance: f64,
}

impl Convergence {
    /// Default iteration budget for series, continued fraction and Newton loops
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;

    /// Create settings with an explicit iteration budget and tolerance
    pub const fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }
}

impl Default for Convergence {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            tolerance: f64::EPSILON,
        }
    }
}
