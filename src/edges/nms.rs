//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! Each orientation is folded to `[0°, 180°)` (a gradient and its opposite
//! describe the same edge normal) and bucketed into four [`DirectionClass`]es.
//! A pixel keeps its magnitude only if it is a ridge top along its class
//! direction; everything else is zeroed. Samples outside the image count as
//! zero.
//!
//! The two neighbor comparisons are deliberately asymmetric: a pixel must be
//! strictly greater than its forward neighbor and greater or equal to its
//! backward neighbor. On a plateau of equal values this keeps exactly one pixel
//! of each tied pair instead of both or neither.
use crate::convolve::BorderMode;
use crate::error::Result;
use crate::image::{ImageF32, ImageView, ImageViewMut, MaskU8};
use serde::Serialize;

/// Quantised gradient direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DirectionClass {
    /// [0°, 22.5°) ∪ [157.5°, 180°): compare right / left
    Deg0,
    /// [22.5°, 67.5°): compare lower-right / upper-left
    Deg45,
    /// [67.5°, 112.5°): compare down / up
    Deg90,
    /// [112.5°, 157.5°): compare lower-left / upper-right
    Deg135,
}

/// `(dx, dy)` of the forward (strict) and backward (non-strict) neighbor,
/// indexed by `DirectionClass as usize`. Image y grows downwards.
const NEIGHBOR_OFFSETS: [[(isize, isize); 2]; 4] = [
    [(1, 0), (-1, 0)],
    [(1, 1), (-1, -1)],
    [(0, 1), (0, -1)],
    [(-1, 1), (1, -1)],
];

impl DirectionClass {
    /// Bucket an orientation given in radians.
    pub fn from_radians(angle: f32) -> Self {
        Self::from_degrees(angle.to_degrees())
    }

    /// Bucket an orientation given in degrees; any real angle is accepted.
    pub fn from_degrees(deg: f32) -> Self {
        let folded = deg.rem_euclid(180.0);
        if folded < 22.5 {
            DirectionClass::Deg0
        } else if folded < 67.5 {
            DirectionClass::Deg45
        } else if folded < 112.5 {
            DirectionClass::Deg90
        } else if folded < 157.5 {
            DirectionClass::Deg135
        } else {
            // includes 180.0 produced by rounding in rem_euclid
            DirectionClass::Deg0
        }
    }

    /// Forward and backward neighbor offsets for this class.
    #[inline]
    pub fn neighbor_offsets(self) -> [(isize, isize); 2] {
        NEIGHBOR_OFFSETS[self as usize]
    }
}

#[inline]
fn sample_or_zero(mag: &ImageF32, x: usize, y: usize, (dx, dy): (isize, isize)) -> f32 {
    let sx = BorderMode::Zero.resolve(x as isize + dx, mag.w);
    let sy = BorderMode::Zero.resolve(y as isize + dy, mag.h);
    match (sx, sy) {
        (Some(sx), Some(sy)) => mag.get(sx, sy),
        _ => 0.0,
    }
}

/// Zero every magnitude sample that is not a local maximum along its
/// quantised gradient direction.
///
/// `magnitude` and `orientation` (radians) must have the same shape. The
/// output is pointwise `<=` the input and applying the suppression again with
/// the same orientations leaves it unchanged.
pub fn non_max_suppression(magnitude: &ImageF32, orientation: &ImageF32) -> Result<ImageF32> {
    magnitude.ensure_same_shape(orientation)?;

    let mut out = ImageF32::new(magnitude.w, magnitude.h);
    for y in 0..magnitude.h {
        let mag_row = magnitude.row(y);
        let ori_row = orientation.row(y);
        let out_row = out.row_mut(y);
        for (x, ((dst, &m), &angle)) in out_row.iter_mut().zip(mag_row).zip(ori_row).enumerate() {
            let [forward, backward] = DirectionClass::from_radians(angle).neighbor_offsets();
            if m > sample_or_zero(magnitude, x, y, forward)
                && m >= sample_or_zero(magnitude, x, y, backward)
            {
                *dst = m;
            }
        }
    }
    Ok(out)
}

/// A sparse edge sample suitable for visualization or JSON export.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeElement {
    /// X coordinate in pixels
    pub x: u32,
    /// Y coordinate in pixels
    pub y: u32,
    /// Normalised gradient magnitude at (x, y)
    pub magnitude: f32,
    /// Gradient direction in radians, range (-π, π]
    pub direction: f32,
}

/// List every foreground pixel of `edges` with its gradient sample.
pub fn edge_elements(
    edges: &MaskU8,
    magnitude: &ImageF32,
    orientation: &ImageF32,
) -> Vec<EdgeElement> {
    let mut out = Vec::with_capacity(edges.count());
    for (y, row) in edges.rows().enumerate() {
        for (x, &on) in row.iter().enumerate() {
            if on == 0 {
                continue;
            }
            out.push(EdgeElement {
                x: x as u32,
                y: y as u32,
                magnitude: magnitude.get(x, y),
                direction: orientation.get(x, y),
            });
        }
    }
    out
}
