//! Sobel image gradients with normalised magnitude and continuous orientation.
//!
//! - Filters the (clamped) input with the 3×3 Sobel pair through the
//!   convolution engine, mirroring borders (reflect-101) so the image frame
//!   does not show up as an artificial edge.
//! - Outputs per-pixel `gx`, `gy`, `magnitude = sqrt(gx²+gy²) / max` in
//!   `[0, 1]` and `orientation = atan2(gy, gx)` in (−π, π].
//! - A flat input has no gradient anywhere. When the raw maximum is at or
//!   below [`MIN_GRADIENT`] (rounding noise left by the blur of a constant
//!   image) the normalisation is skipped and the magnitude is zero (see
//!   [`Gradient::is_degenerate`]).
//!
//! Complexity: O(W·H) per pass; memory: four float buffers.
use crate::convolve::{convolve_with_border, BorderMode, Kernel, Kernel3};
use crate::error::{CannyError, Result};
use crate::image::{ImageF32, ImageView, ImageViewMut};
use log::debug;

pub const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
pub const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Raw Sobel magnitudes up to this value count as a flat image. A one-level
/// step of an 8-bit image gives `4 / 255`.
pub const MIN_GRADIENT: f32 = 1e-5;

/// Per-pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Gradient {
    /// Horizontal derivative (Sobel X response)
    pub gx: ImageF32,
    /// Vertical derivative (Sobel Y response)
    pub gy: ImageF32,
    /// Edge strength `sqrt(gx^2 + gy^2)` divided by its image-wide maximum
    pub magnitude: ImageF32,
    /// Gradient direction `atan2(gy, gx)` in radians, range (−π, π]
    pub orientation: ImageF32,
    /// Maximum raw magnitude before normalisation
    pub max_magnitude: f32,
}

impl Gradient {
    /// `true` when the raw magnitude never exceeded [`MIN_GRADIENT`]; the
    /// normalised magnitude is then zero everywhere.
    pub fn is_degenerate(&self) -> bool {
        self.max_magnitude <= MIN_GRADIENT
    }

    /// Turn a degenerate gradient into [`CannyError::DegenerateGradient`].
    pub fn require_non_degenerate(self) -> Result<Self> {
        if self.is_degenerate() {
            return Err(CannyError::DegenerateGradient);
        }
        Ok(self)
    }
}

/// Compute Sobel gradients on a single-channel float image in `[0, 1]`.
///
/// Malformed buffers and non-finite samples fail with
/// [`CannyError::InvalidInputType`]. Samples are clamped to `[0, 1]` before
/// filtering.
pub fn sobel_gradients(image: &ImageF32) -> Result<Gradient> {
    image.validate()?;
    let clamped = image.map(|v| v.clamp(0.0, 1.0));

    let gx = convolve_with_border(
        &clamped,
        &Kernel::from_3x3(&SOBEL_KERNEL_X),
        BorderMode::Reflect101,
    );
    let gy = convolve_with_border(
        &clamped,
        &Kernel::from_3x3(&SOBEL_KERNEL_Y),
        BorderMode::Reflect101,
    );

    let (w, h) = (image.w, image.h);
    let mut magnitude = ImageF32::new(w, h);
    let mut orientation = ImageF32::new(w, h);
    let mut max_magnitude = 0.0f32;
    for y in 0..h {
        let gx_row = gx.row(y);
        let gy_row = gy.row(y);
        let out_mag = magnitude.row_mut(y);
        for ((m, &sx), &sy) in out_mag.iter_mut().zip(gx_row).zip(gy_row) {
            *m = (sx * sx + sy * sy).sqrt();
            max_magnitude = max_magnitude.max(*m);
        }
        let out_ori = orientation.row_mut(y);
        for ((o, &sx), &sy) in out_ori.iter_mut().zip(gx_row).zip(gy_row) {
            *o = sy.atan2(sx);
        }
    }

    if max_magnitude > MIN_GRADIENT {
        for y in 0..h {
            for m in magnitude.row_mut(y) {
                *m /= max_magnitude;
            }
        }
    } else {
        debug!("sobel_gradients: flat {w}x{h} input (max {max_magnitude:e}), magnitude zeroed");
        magnitude.data.fill(0.0);
    }

    Ok(Gradient {
        gx,
        gy,
        magnitude,
        orientation,
        max_magnitude,
    })
}
