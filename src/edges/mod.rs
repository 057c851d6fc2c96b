//! Edge processing: Sobel gradients and non-maximum suppression.
//!
//! - Gradient computation returning `gx`, `gy`, a magnitude normalised to
//!   `[0, 1]` and the continuous orientation `atan2(gy, gx)`.
//! - Canny-style non-maximum suppression with four direction classes,
//!   producing a thinned magnitude image of the same shape.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Keep outputs dense images so later stages (thresholding, labeling) can
//!   consume them directly.

pub mod grad;
pub mod nms;

/// Per-pixel gradients with normalised magnitude and orientation.
pub use grad::{sobel_gradients, Gradient, MIN_GRADIENT, SOBEL_KERNEL_X, SOBEL_KERNEL_Y};
/// Direction-aligned suppression and sparse edge export.
pub use nms::{edge_elements, non_max_suppression, DirectionClass, EdgeElement};
