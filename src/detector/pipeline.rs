//! Detector pipeline driving edge detection end-to-end.
//!
//! The [`CannyDetector`] exposes a simple API: feed a grayscale image and get a
//! binary edge map together with every intermediate image and a
//! [`CannyReport`]. Stages run strictly in order (blur, gradient,
//! non-maximum suppression, hysteresis); each one allocates its own output and
//! only reads the previous one.
//!
//! Typical usage:
//! ```no_run
//! use canny_edges::{CannyDetector, CannyParams};
//! use canny_edges::image::ImageF32;
//!
//! # fn example(gray: ImageF32) -> canny_edges::Result<()> {
//! let detector = CannyDetector::new(CannyParams::default())?;
//! let result = detector.detect(&gray)?;
//! println!("edge pixels: {}", result.report.edge_pixels);
//! # Ok(())
//! # }
//! ```
use super::params::{CannyParams, ThresholdMode};
use crate::blur::{self, GaussianFilter};
use crate::diagnostics::{CannyReport, TimingBreakdown};
use crate::edges::{non_max_suppression, sobel_gradients, Gradient};
use crate::error::Result;
use crate::image::{ImageF32, ImageU8, MaskU8};
use crate::labeling::LabelMap;
use crate::threshold::{hysteresis_auto_with_labels, hysteresis_with_labels};
use log::debug;
use std::time::Instant;

/// Everything produced by one detector run.
#[derive(Clone, Debug)]
pub struct CannyResult {
    /// Gaussian-smoothed input
    pub blurred: ImageF32,
    /// Sobel gradients of the blurred image
    pub gradient: Gradient,
    /// Gradient magnitude after non-maximum suppression
    pub suppressed: ImageF32,
    /// Labeling of the pixels above the low threshold
    pub candidates: LabelMap,
    /// Final binary edge map
    pub edges: MaskU8,
    pub report: CannyReport,
}

/// Canny edge detector with a pre-built Gaussian filter.
#[derive(Clone, Debug)]
pub struct CannyDetector {
    params: CannyParams,
    filter: GaussianFilter,
}

impl CannyDetector {
    /// Create a detector. Fails when σ is not a positive finite number.
    pub fn new(params: CannyParams) -> Result<Self> {
        let filter = GaussianFilter::new(params.sigma)?;
        Ok(Self { params, filter })
    }

    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Run the detector on an 8-bit grayscale image (mapped to `[0, 1]`).
    pub fn detect_u8(&self, gray: ImageU8<'_>) -> Result<CannyResult> {
        self.detect(&gray.to_f32())
    }

    /// Run the detector on a float grayscale image with samples in `[0, 1]`.
    pub fn detect(&self, image: &ImageF32) -> Result<CannyResult> {
        image.validate()?;
        debug!(
            "CannyDetector::detect start w={} h={} sigma={} thresholds={:?}",
            image.w, image.h, self.params.sigma, self.params.thresholds
        );
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let blurred = timing.time("blur", || blur::apply(&self.filter, image))?;
        let gradient = timing.time("gradient", || sobel_gradients(&blurred))?;
        let suppressed = timing.time("nms", || {
            non_max_suppression(&gradient.magnitude, &gradient.orientation)
        })?;

        let (hysteresis, thresholds) = timing.time("hysteresis", || match self.params.thresholds
        {
            ThresholdMode::Fixed(pair) => Ok((hysteresis_with_labels(&suppressed, pair), Some(pair))),
            ThresholdMode::Auto {
                low_prop,
                high_prop,
            } => hysteresis_auto_with_labels(&suppressed, low_prop, high_prop),
        })?;
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;

        let report = CannyReport {
            width: image.w,
            height: image.h,
            sigma: self.params.sigma,
            threshold_mode: self.params.thresholds,
            thresholds,
            degenerate_gradient: gradient.is_degenerate(),
            suppressed_pixels: suppressed.data.iter().filter(|&&v| v > 0.0).count(),
            candidate_components: hysteresis.candidates.count,
            kept_components: hysteresis.kept_components,
            edge_pixels: hysteresis.edges.count(),
            timing,
        };
        debug!(
            "CannyDetector::detect done edges={} components={}/{} total_ms={:.3}",
            report.edge_pixels,
            report.kept_components,
            report.candidate_components,
            report.timing.total_ms
        );

        Ok(CannyResult {
            blurred,
            gradient,
            suppressed,
            candidates: hysteresis.candidates,
            edges: hysteresis.edges,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CannyError;
    use crate::threshold::ThresholdPair;

    fn square(size: usize) -> ImageF32 {
        let lo = size / 4;
        let hi = size - size / 4;
        ImageF32::from_fn(size, size, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                0.9
            } else {
                0.1
            }
        })
    }

    #[test]
    fn invalid_sigma_fails_at_construction() {
        let err = CannyDetector::new(CannyParams::default().with_sigma(0.0)).unwrap_err();
        assert_eq!(err, CannyError::InvalidSigma(0.0));
    }

    #[test]
    fn square_outline_is_detected() {
        let detector = CannyDetector::new(
            CannyParams::default()
                .with_sigma(1.0)
                .with_thresholds(ThresholdMode::Fixed(ThresholdPair::new(0.2, 0.5).unwrap())),
        )
        .unwrap();
        let result = detector.detect(&square(32)).unwrap();
        let report = &result.report;
        assert!(report.edge_pixels > 0);
        assert!(report.edge_pixels <= report.suppressed_pixels);
        assert!(!report.degenerate_gradient);
        // far from the outline nothing survives
        assert!(!result.edges.get(16, 16));
        assert!(!result.edges.get(1, 1));
        for label in ["blur", "gradient", "nms", "hysteresis"] {
            assert!(report.timing.stage_ms(label).is_some());
        }
        assert!(result.edges.is_subset_of(&MaskU8::from_image(&result.suppressed, |v| v > 0.2)));
    }

    #[test]
    fn flat_image_yields_empty_edges_in_auto_mode() {
        let detector = CannyDetector::new(CannyParams::default()).unwrap();
        let result = detector.detect(&ImageF32::filled(16, 12, 0.4)).unwrap();
        assert!(result.report.degenerate_gradient);
        assert!(result.report.thresholds.is_none());
        assert_eq!(result.edges.count(), 0);
    }

    #[test]
    fn flat_image_yields_empty_edges_with_fixed_thresholds() {
        let detector = CannyDetector::new(
            CannyParams::default()
                .with_sigma(2.0)
                .with_thresholds(ThresholdMode::Fixed(ThresholdPair::new(0.1, 0.5).unwrap())),
        )
        .unwrap();
        for (w, h) in [(16, 12), (64, 48)] {
            let result = detector.detect(&ImageF32::filled(w, h, 0.4)).unwrap();
            assert!(result.report.degenerate_gradient);
            assert_eq!(result.gradient.magnitude.max_value(), Some(0.0));
            assert_eq!(result.report.suppressed_pixels, 0);
            assert_eq!(result.edges.count(), 0, "{w}x{h}");
        }
    }

    #[test]
    fn u8_input_matches_float_input() {
        let bytes: Vec<u8> = square(20).data.iter().map(|&v| (v * 255.0) as u8).collect();
        let view = ImageU8 {
            w: 20,
            h: 20,
            stride: 20,
            data: &bytes,
        };
        let detector = CannyDetector::new(CannyParams::default().with_sigma(1.0)).unwrap();
        let from_u8 = detector.detect_u8(view.clone()).unwrap();
        let from_f32 = detector.detect(&view.to_f32()).unwrap();
        assert_eq!(from_u8.edges, from_f32.edges);
    }

    #[test]
    fn malformed_input_is_rejected() {
        let detector = CannyDetector::new(CannyParams::default()).unwrap();
        let mut img = ImageF32::new(8, 8);
        img.set(3, 3, f32::NAN);
        assert!(matches!(
            detector.detect(&img),
            Err(CannyError::InvalidInputType { .. })
        ));
    }
}
