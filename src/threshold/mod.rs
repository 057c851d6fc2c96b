//! Edge retention on the suppressed gradient magnitude.
//!
//! - [`hysteresis`]: fixed `(low, high)` thresholds with component-based
//!   propagation of strong edges.
//! - [`auto`]: thresholds derived from target proportions of surviving edge
//!   pixels, then delegated to the fixed variant.

pub mod auto;
pub mod hysteresis;

pub use auto::{
    hysteresis_auto_with_labels, hysteresis_threshold_auto, select_thresholds, NOISE_FLOOR,
};
pub use hysteresis::{hysteresis_threshold, hysteresis_with_labels, HysteresisOutput, ThresholdPair};
