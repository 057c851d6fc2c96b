//! Owned binary mask (0 = background, 1 = foreground), row-major.
use super::ImageF32;
use crate::error::{CannyError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskU8 {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl MaskU8 {
    /// All-background mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Mask with foreground wherever `pred(value)` holds.
    pub fn from_image(image: &ImageF32, pred: impl Fn(f32) -> bool) -> Self {
        use super::{ImageView, ImageViewMut};

        let mut out = Self::new(image.w, image.h);
        for (y, row) in image.rows().enumerate() {
            for (d, &v) in out.row_mut(y).iter_mut().zip(row) {
                *d = pred(v) as u8;
            }
        }
        out
    }

    /// Build from rows of `0`/non-zero values. Ragged rows fail with
    /// [`CannyError::InvalidInputType`].
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(CannyError::InvalidInputType {
                    reason: format!("mask row {y} has {} values, expected {w}", row.len()),
                });
            }
            data.extend(row.iter().map(|&v| (v != 0) as u8));
        }
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        self.data[y * self.w + x] = on as u8;
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// `true` when every foreground pixel of `self` is also set in `other`.
    pub fn is_subset_of(&self, other: &MaskU8) -> bool {
        use super::ImageView;

        self.dims() == other.dims()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a == 0 || b != 0)
    }

    /// Float view with 0.0 / 1.0 samples.
    pub fn to_f32(&self) -> ImageF32 {
        ImageF32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: self.data.iter().map(|&v| v as f32).collect(),
        }
    }
}

impl super::traits::ImageView for MaskU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.w..(y + 1) * self.w]
    }
}

impl super::traits::ImageViewMut for MaskU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.data[y * self.w..(y + 1) * self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_normalises_to_binary() {
        let m = MaskU8::from_rows(&[[0u8, 7, 0], [1, 0, 255]]).unwrap();
        assert_eq!(m.data, vec![0, 1, 0, 1, 0, 1]);
        assert_eq!(m.count(), 3);
        assert!(m.get(1, 0));
        assert!(!m.get(1, 1));
    }

    #[test]
    fn subset_requires_matching_shape() {
        let a = MaskU8::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
        let b = MaskU8::from_rows(&[[1u8, 1], [0, 0]]).unwrap();
        assert!(a.is_subset_of(&b));
        assert!(!b.is_subset_of(&a));
        assert!(!a.is_subset_of(&MaskU8::new(3, 2)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = MaskU8::from_rows(&[vec![0u8, 1, 1], vec![1]]).unwrap_err();
        assert!(matches!(err, CannyError::InvalidInputType { .. }));
        let empty = MaskU8::from_rows::<[u8; 0]>(&[]).unwrap();
        assert_eq!((empty.w, empty.h), (0, 0));
    }
}
