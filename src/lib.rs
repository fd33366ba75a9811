//! Numerically robust special functions, probability distributions and pseudo-random sampling
//!
//! The crate provides the numeric primitives used by downstream statistical and
//! estimation algorithms: the gamma and error function families, the chi-squared
//! and normal distributions built on them, and a hierarchy of seedable samplers
//! producing bounded, typed and Gaussian-shaped values from a uniform bit source.
//!
//! Evaluation functions are pure and safe to call concurrently. Sampler instances
//! mutate internal generator state on every call and must be confined to a single
//! logical owner.

#![forbid(unsafe_code)]

/// Probability distributions built on the special function engines
pub mod distribution;
/// Error types shared by all numeric and sampling operations
pub mod error;
/// Pseudo-random sources and typed samplers
pub mod random;
/// Special mathematical functions for the gamma and error function families
pub mod special;

pub use error::{Result, StatError};
