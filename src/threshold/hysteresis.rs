//! Two-threshold edge retention.
//!
//! Pixels above `low` are edge candidates. Candidates are grouped into
//! 8-connected components, and a component survives as a whole when at least
//! one of its pixels is above `high`. Weak pixels therefore only survive when
//! they are connected to a strong one.
use crate::error::{CannyError, Result};
use crate::image::{ImageF32, ImageView, MaskU8};
use crate::labeling::{label_components, LabelMap};
use serde::{Deserialize, Serialize};

/// Validated `(low, high)` pair with `0 <= low <= high <= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct ThresholdPair {
    low: f32,
    high: f32,
}

#[derive(Deserialize)]
struct RawThresholds {
    low: f32,
    high: f32,
}

impl TryFrom<RawThresholds> for ThresholdPair {
    type Error = CannyError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        ThresholdPair::new(raw.low, raw.high)
    }
}

impl ThresholdPair {
    pub fn new(low: f32, high: f32) -> Result<Self> {
        let in_range = |v: f32| (0.0..=1.0).contains(&v);
        if !in_range(low) || !in_range(high) || low > high {
            return Err(CannyError::InvalidThreshold { low, high });
        }
        Ok(Self { low, high })
    }

    /// Candidate threshold: pixels strictly above it may become edges.
    pub fn low(&self) -> f32 {
        self.low
    }

    /// Seed threshold: a component needs a pixel strictly above it.
    pub fn high(&self) -> f32 {
        self.high
    }
}

/// Output of [`hysteresis_with_labels`]: the final edge mask plus the
/// intermediate candidate labeling, kept for diagnostics.
#[derive(Clone, Debug)]
pub struct HysteresisOutput {
    pub edges: MaskU8,
    pub candidates: LabelMap,
    /// Number of candidate components that contained a strong pixel
    pub kept_components: usize,
}

/// Binary edge mask from `edges` (strengths in `[0, 1]`) and `thresholds`.
pub fn hysteresis_threshold(edges: &ImageF32, thresholds: ThresholdPair) -> MaskU8 {
    hysteresis_with_labels(edges, thresholds).edges
}

/// Same as [`hysteresis_threshold`] but also returns the candidate labeling.
pub fn hysteresis_with_labels(edges: &ImageF32, thresholds: ThresholdPair) -> HysteresisOutput {
    let ThresholdPair { low, high } = thresholds;
    let candidate_mask = MaskU8::from_image(edges, |v| v > low);
    let candidates = label_components(&candidate_mask);

    let mut strong = vec![false; candidates.count + 1];
    for (y, row) in edges.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            if v > high {
                strong[candidates.get(x, y) as usize] = true;
            }
        }
    }

    let mut out = MaskU8::new(edges.w, edges.h);
    for (dst, &label) in out.data.iter_mut().zip(&candidates.labels) {
        *dst = strong[label as usize] as u8;
    }
    let kept_components = strong.iter().filter(|&&s| s).count();

    HysteresisOutput {
        edges: out,
        candidates,
        kept_components,
    }
}
