//! Small-kernel 2D filtering of float images.
//!
//! Filtering is a cross-correlation (the kernel is not flipped), the same
//! convention image libraries use for `filter2D`: a kernel `[-1, 0, 1]`
//! responds positively to intensity rising towards +x. Every filter in the
//! crate is either symmetric or relies on this orientation.
//!
//! Border samples are produced by [`BorderMode`]. [`convolve`] pads with
//! zeros; [`convolve_with_border`] takes an explicit mode.
//!
//! With the `parallel` feature the output rows are filled concurrently with
//! rayon. Rows are independent, so the result is identical to the sequential
//! pass.
use crate::error::{CannyError, Result};
use crate::image::{ImageF32, ImageView};

/// Fixed-size 3×3 kernel literal.
pub type Kernel3 = [[f32; 3]; 3];

/// How samples outside the image are synthesised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderMode {
    /// Outside samples are 0.
    #[default]
    Zero,
    /// Mirror without repeating the edge sample (`dcb|abcd|cba`).
    Reflect101,
}

impl BorderMode {
    /// Map a possibly out-of-range coordinate onto `0..len`. `None` means the
    /// sample is an implicit zero.
    #[inline]
    pub fn resolve(self, idx: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if idx >= 0 && (idx as usize) < len {
            return Some(idx as usize);
        }
        match self {
            BorderMode::Zero => None,
            BorderMode::Reflect101 => {
                if len == 1 {
                    return Some(0);
                }
                let period = 2 * (len as isize - 1);
                let m = idx.rem_euclid(period);
                let folded = if m >= len as isize { period - m } else { m };
                Some(folded as usize)
            }
        }
    }
}

/// Odd-sized 2D kernel, centred on its middle cell, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    w: usize,
    h: usize,
    coeffs: Vec<f32>,
}

impl Kernel {
    /// Wrap `coeffs` as a `w × h` kernel. Both dimensions must be odd and the
    /// coefficient count must match.
    pub fn new(w: usize, h: usize, coeffs: Vec<f32>) -> Result<Self> {
        if w % 2 == 0 || h % 2 == 0 || coeffs.len() != w * h {
            return Err(CannyError::InvalidKernel {
                width: w,
                height: h,
                len: coeffs.len(),
            });
        }
        Ok(Self { w, h, coeffs })
    }

    pub fn from_3x3(k: &Kernel3) -> Self {
        Self {
            w: 3,
            h: 3,
            coeffs: k.iter().flatten().copied().collect(),
        }
    }

    /// `size × size` kernel with a single 1 at the centre.
    pub fn identity(size: usize) -> Result<Self> {
        let mut coeffs = vec![0.0; size * size];
        if let Some(c) = coeffs.get_mut(size * size / 2) {
            *c = 1.0;
        }
        Self::new(size, size, coeffs)
    }

    /// `size × size` kernel with every coefficient equal to 1.
    pub fn box_filter(size: usize) -> Result<Self> {
        Self::new(size, size, vec![1.0; size * size])
    }

    /// Outer product `taps ⊗ taps`, the 2D form of a separable filter.
    pub fn outer(taps: &[f32]) -> Result<Self> {
        let n = taps.len();
        let mut coeffs = Vec::with_capacity(n * n);
        for &ty in taps {
            coeffs.extend(taps.iter().map(|&tx| tx * ty));
        }
        Self::new(n, n, coeffs)
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn get(&self, kx: usize, ky: usize) -> f32 {
        self.coeffs[ky * self.w + kx]
    }

    pub fn sum(&self) -> f32 {
        self.coeffs.iter().map(|&c| c as f64).sum::<f64>() as f32
    }
}

/// Filter `image` with `kernel`, zero padding outside the image.
pub fn convolve(image: &ImageF32, kernel: &Kernel) -> ImageF32 {
    convolve_with_border(image, kernel, BorderMode::Zero)
}

/// Filter `image` with `kernel` using `border` for out-of-range samples.
/// The output has the same shape as the input.
pub fn convolve_with_border(image: &ImageF32, kernel: &Kernel, border: BorderMode) -> ImageF32 {
    let mut out = ImageF32::new(image.w, image.h);
    if image.w == 0 || image.h == 0 {
        return out;
    }
    fill_rows(image, kernel, border, &mut out);
    out
}

/// Apply the same odd-length 1D filter horizontally, then vertically.
pub fn convolve_separable(image: &ImageF32, taps: &[f32], border: BorderMode) -> Result<ImageF32> {
    let row = Kernel::new(taps.len(), 1, taps.to_vec())?;
    let col = Kernel::new(1, taps.len(), taps.to_vec())?;
    let horizontal = convolve_with_border(image, &row, border);
    Ok(convolve_with_border(&horizontal, &col, border))
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(image: &ImageF32, kernel: &Kernel, border: BorderMode, out: &mut ImageF32) {
    use crate::image::ImageViewMut;

    for y in 0..image.h {
        correlate_row(image, kernel, border, y, out.row_mut(y));
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(image: &ImageF32, kernel: &Kernel, border: BorderMode, out: &mut ImageF32) {
    use rayon::prelude::*;

    // `out` is freshly allocated, so stride == width.
    let w = out.w;
    out.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| correlate_row(image, kernel, border, y, row));
}

fn correlate_row(image: &ImageF32, kernel: &Kernel, border: BorderMode, y: usize, out: &mut [f32]) {
    let rx = (kernel.w / 2) as isize;
    let ry = (kernel.h / 2) as isize;
    let (w, h) = (image.w, image.h);

    for ky in 0..kernel.h {
        let Some(sy) = border.resolve(y as isize + ky as isize - ry, h) else {
            continue;
        };
        let src = image.row(sy);
        for kx in 0..kernel.w {
            let weight = kernel.get(kx, ky);
            if weight == 0.0 {
                continue;
            }
            let dx = kx as isize - rx;
            for (x, acc) in out.iter_mut().enumerate() {
                if let Some(sx) = border.resolve(x as isize + dx, w) {
                    *acc += weight * src[sx];
                }
            }
        }
    }
}
