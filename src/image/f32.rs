//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used for every intermediate of the pipeline: intensities, blurred images,
//! gradient magnitudes and orientations. Provides row access and a contiguous
//! slice when `stride == width`.
use crate::error::{CannyError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0.0)
    }

    /// Construct a buffer of size `w × h` with every sample set to `value`.
    pub fn filled(w: usize, h: usize, value: f32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap an existing row-major buffer. Fails when `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != w * h {
            return Err(CannyError::InvalidInputType {
                reason: format!(
                    "buffer holds {} samples, {}x{} needs {}",
                    data.len(),
                    w,
                    h,
                    w * h
                ),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Check that the buffer layout matches the declared dimensions and that
    /// every sample is a finite float.
    pub fn validate(&self) -> Result<()> {
        if self.stride < self.w {
            return Err(CannyError::InvalidInputType {
                reason: format!("stride {} is smaller than width {}", self.stride, self.w),
            });
        }
        let needed = if self.h == 0 {
            0
        } else {
            (self.h - 1) * self.stride + self.w
        };
        if self.data.len() < needed {
            return Err(CannyError::InvalidInputType {
                reason: format!(
                    "buffer holds {} samples, {}x{} (stride {}) needs {}",
                    self.data.len(),
                    self.w,
                    self.h,
                    self.stride,
                    needed
                ),
            });
        }
        for y in 0..self.h {
            let start = y * self.stride;
            if let Some(x) = self.data[start..start + self.w]
                .iter()
                .position(|v| !v.is_finite())
            {
                return Err(CannyError::InvalidInputType {
                    reason: format!("non-finite sample at ({x}, {y})"),
                });
            }
        }
        Ok(())
    }

    /// Largest sample, or `None` for an empty image.
    pub fn max_value(&self) -> Option<f32> {
        use crate::image::ImageView;

        self.rows()
            .flat_map(|row| row.iter().copied())
            .reduce(f32::max)
    }

    /// Apply `f` to every sample, producing a new image of the same shape.
    pub fn map(&self, f: impl Fn(f32) -> f32) -> ImageF32 {
        use crate::image::{ImageView, ImageViewMut};

        let mut out = ImageF32::new(self.w, self.h);
        for y in 0..self.h {
            for (d, &s) in out.row_mut(y).iter_mut().zip(self.row(y)) {
                *d = f(s);
            }
        }
        out
    }

    /// Fail with [`CannyError::ShapeMismatch`] unless `other` has the same size.
    pub fn ensure_same_shape(&self, other: &ImageF32) -> Result<()> {
        use crate::image::ImageView;

        if self.dims() != other.dims() {
            return Err(CannyError::ShapeMismatch {
                expected: self.dims(),
                actual: other.dims(),
            });
        }
        Ok(())
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
