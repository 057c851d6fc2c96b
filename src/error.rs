//! Error types for the edge detection pipeline.

use thiserror::Error;

/// Errors raised by the pipeline stages.
///
/// Every variant is a precondition fault on the caller's side; none of them is
/// transient, so nothing in the crate retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CannyError {
    #[error("Invalid input image: {reason}")]
    InvalidInputType { reason: String },

    #[error("Invalid kernel: {width}x{height} with {len} coefficients (dimensions must be odd)")]
    InvalidKernel {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("Image size mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Invalid Gaussian sigma: {0} (must lie in (0, 1000])")]
    InvalidSigma(f32),

    #[error("Invalid threshold pair: low = {low}, high = {high} (need 0 <= low <= high <= 1)")]
    InvalidThreshold { low: f32, high: f32 },

    #[error("Invalid proportion: {name} = {value} (must lie in [0, 1])")]
    InvalidProportion { name: &'static str, value: f64 },

    #[error("No positive edge strength to derive thresholds from")]
    EmptyEdgeSet,

    #[error("Gradient magnitude is zero everywhere")]
    DegenerateGradient,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CannyError>;
