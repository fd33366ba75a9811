//! Probability distributions built on the special function engines
//!
//! Each distribution owns its validated shape parameters and evaluates its
//! density, cumulative distribution and quantile functions through the gamma
//! and error function families.

/// Chi-squared distribution parameterized by degrees of freedom
pub mod chi_squared;
/// Normal distribution with first-order uncertainty propagation
pub mod normal;

pub use chi_squared::ChiSquared;
pub use normal::{Differentiable, Normal, Polynomial, Sinusoid};
