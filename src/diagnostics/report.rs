use super::timing::TimingBreakdown;
use crate::detector::ThresholdMode;
use crate::threshold::ThresholdPair;
use serde::Serialize;

/// Serializable summary of one detector run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CannyReport {
    pub width: usize,
    pub height: usize,
    pub sigma: f32,
    pub threshold_mode: ThresholdMode,
    /// Thresholds actually applied; `None` when automatic selection found no
    /// edge strength at all
    pub thresholds: Option<ThresholdPair>,
    /// The gradient magnitude was zero everywhere
    pub degenerate_gradient: bool,
    /// Pixels that survived non-maximum suppression
    pub suppressed_pixels: usize,
    /// Connected components among the pixels above the low threshold
    pub candidate_components: usize,
    /// Components holding at least one pixel above the high threshold
    pub kept_components: usize,
    pub edge_pixels: usize,
    pub timing: TimingBreakdown,
}
