//! Threshold selection from the distribution of edge strengths.
//!
//! Given the proportions of non-zero edge pixels that should lie above the low
//! and the high threshold, the thresholds are read off the sorted positive
//! strengths: `low = v[⌊(1 − low_prop)·N⌋]`, `high = v[⌊(1 − high_prop)·N⌋]`.
//! Strengths below [`NOISE_FLOOR`] are treated as "no edge". Only the two
//! order statistics are needed, so they are found with a selection pass
//! instead of a full sort.
use super::hysteresis::{hysteresis_with_labels, HysteresisOutput, ThresholdPair};
use crate::error::{CannyError, Result};
use crate::image::{ImageF32, ImageView, MaskU8};
use crate::labeling::LabelMap;
use log::{debug, warn};

/// Strengths below this value count as numerical noise.
pub const NOISE_FLOOR: f32 = 1e-6;

fn check_proportion(name: &'static str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(CannyError::InvalidProportion { name, value });
    }
    Ok(())
}

/// Rank of the order statistic for proportion `prop` among `n` values,
/// clamped to the last element.
fn rank(prop: f64, n: usize) -> usize {
    let r = ((1.0 - prop) * n as f64).floor() as usize;
    r.min(n - 1)
}

/// Derive `(low, high)` from the positive strengths of `edges`.
///
/// Fails with [`CannyError::EmptyEdgeSet`] when no strength reaches
/// [`NOISE_FLOOR`], and with [`CannyError::InvalidProportion`] when a
/// proportion lies outside `[0, 1]`.
pub fn select_thresholds(edges: &ImageF32, low_prop: f64, high_prop: f64) -> Result<ThresholdPair> {
    check_proportion("low_prop", low_prop)?;
    check_proportion("high_prop", high_prop)?;
    if high_prop > low_prop {
        warn!("select_thresholds: high_prop {high_prop} > low_prop {low_prop}, high threshold will sit below the low one and is raised to it");
    }

    let mut positive: Vec<f32> = edges
        .rows()
        .flat_map(|row| row.iter().copied())
        .filter(|&v| v >= NOISE_FLOOR)
        .collect();
    if positive.is_empty() {
        return Err(CannyError::EmptyEdgeSet);
    }

    let n = positive.len();
    let low_rank = rank(low_prop, n);
    let high_rank = rank(high_prop, n);

    // select the larger rank first; the smaller one then lies in the left part
    let (first, second) = if low_rank >= high_rank {
        (low_rank, high_rank)
    } else {
        (high_rank, low_rank)
    };
    let (left, &mut first_value, _) = positive.select_nth_unstable_by(first, f32::total_cmp);
    let second_value = if second == first {
        first_value
    } else {
        *left.select_nth_unstable_by(second, f32::total_cmp).1
    };
    let (low, high) = if low_rank >= high_rank {
        (first_value, second_value)
    } else {
        (second_value, first_value)
    };

    debug!("select_thresholds: n={n} low[{low_rank}]={low} high[{high_rank}]={high}");
    ThresholdPair::new(low, high.max(low))
}

/// Hysteresis with thresholds chosen by [`select_thresholds`].
///
/// An image without any edge strength yields an all-zero mask together with
/// `None` thresholds rather than an error.
pub fn hysteresis_threshold_auto(
    edges: &ImageF32,
    low_prop: f64,
    high_prop: f64,
) -> Result<(MaskU8, Option<ThresholdPair>)> {
    let (out, thresholds) = hysteresis_auto_with_labels(edges, low_prop, high_prop)?;
    Ok((out.edges, thresholds))
}

/// [`hysteresis_threshold_auto`] keeping the candidate labeling.
pub fn hysteresis_auto_with_labels(
    edges: &ImageF32,
    low_prop: f64,
    high_prop: f64,
) -> Result<(HysteresisOutput, Option<ThresholdPair>)> {
    let cleaned = edges.map(|v| if v < NOISE_FLOOR { 0.0 } else { v });
    match select_thresholds(&cleaned, low_prop, high_prop) {
        Ok(thresholds) => Ok((hysteresis_with_labels(&cleaned, thresholds), Some(thresholds))),
        Err(CannyError::EmptyEdgeSet) => {
            debug!(
                "hysteresis_threshold_auto: no edge strength in {}x{} image, empty result",
                edges.w, edges.h
            );
            let empty = HysteresisOutput {
                edges: MaskU8::new(edges.w, edges.h),
                candidates: LabelMap {
                    w: edges.w,
                    h: edges.h,
                    labels: vec![0; edges.w * edges.h],
                    count: 0,
                },
                kept_components: 0,
            };
            Ok((empty, None))
        }
        Err(err) => Err(err),
    }
}
