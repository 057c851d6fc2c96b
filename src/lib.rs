#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Pipeline stages, usable on their own.
pub mod blur;
pub mod config;
pub mod convolve;
pub mod edges;
pub mod labeling;
pub mod threshold;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CannyDetector, CannyParams, CannyResult, ThresholdMode};
pub use crate::error::{CannyError, Result};

// Run summary returned with every detection.
pub use crate::diagnostics::{CannyReport, TimingBreakdown};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_edges::prelude::*;
///
/// # fn main() -> canny_edges::Result<()> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![0u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = CannyDetector::new(CannyParams {
///     sigma: 1.5,
///     ..Default::default()
/// })?;
///
/// let result = detector.detect_u8(img)?;
/// println!("edges={} total_ms={:.3}", result.report.edge_pixels, result.report.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageF32, ImageU8, MaskU8};
    pub use crate::threshold::ThresholdPair;
    pub use crate::{CannyDetector, CannyParams, CannyResult, ThresholdMode};
}

// --- Stage-level API (for tools & advanced users) ---------------------------

pub mod stages {
    pub use crate::blur::{blur_gauss, gaussian_kernel};
    pub use crate::convolve::{convolve, convolve_with_border, BorderMode, Kernel};
    pub use crate::edges::{non_max_suppression, sobel_gradients, DirectionClass, Gradient};
    pub use crate::labeling::{label_components, LabelMap};
    pub use crate::threshold::{
        hysteresis_threshold, hysteresis_threshold_auto, select_thresholds, ThresholdPair,
    };
}
