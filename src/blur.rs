//! Gaussian smoothing ahead of gradient estimation.
//!
//! The kernel width follows `round(2·ceil(3σ) + 1)`, i.e. the kernel reaches
//! three standard deviations on either side of the centre. The 2D Gaussian is
//! applied as two 1D passes of the normalised taps; since the 2D kernel is the
//! outer product of the 1D one, the result is the same as a full 2D pass.
//!
//! Borders are mirrored (reflect-101) so that a constant image stays constant.
use crate::convolve::{convolve_separable, BorderMode, Kernel};
use crate::error::{CannyError, Result};
use crate::image::ImageF32;

/// Largest accepted σ; the kernel is then 6001 taps wide.
pub const MAX_SIGMA: f32 = 1000.0;

/// Trait implemented by separable 1D filters.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to be
    /// symmetric around its centre, but the implementation does not rely on it.
    fn taps(&self) -> &[f32];
}

/// Normalised 1D Gaussian taps for a given σ.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianFilter {
    sigma: f32,
    taps: Vec<f32>,
}

impl GaussianFilter {
    pub fn new(sigma: f32) -> Result<Self> {
        if !sigma.is_finite() || sigma <= 0.0 || sigma > MAX_SIGMA {
            return Err(CannyError::InvalidSigma(sigma));
        }
        let width = kernel_width(sigma);
        let radius = (width / 2) as f64;
        let s = sigma as f64;
        let raw: Vec<f64> = (0..width)
            .map(|i| {
                let d = i as f64 - radius;
                (-(d * d) / (2.0 * s * s)).exp()
            })
            .collect();
        let total: f64 = raw.iter().sum();
        let taps = raw.iter().map(|&v| (v / total) as f32).collect();
        Ok(Self { sigma, taps })
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }
}

impl SeparableFilter for GaussianFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Kernel side length for a given σ: `round(2·ceil(3σ) + 1)`.
pub fn kernel_width(sigma: f32) -> usize {
    (2.0 * (3.0 * sigma as f64).ceil() + 1.0).round() as usize
}

/// Full 2D Gaussian kernel for σ, normalised to sum 1.
pub fn gaussian_kernel(sigma: f32) -> Result<Kernel> {
    Kernel::outer(GaussianFilter::new(sigma)?.taps())
}

/// Separable blur with any [`SeparableFilter`], mirrored borders.
pub fn apply(filter: &dyn SeparableFilter, image: &ImageF32) -> Result<ImageF32> {
    convolve_separable(image, filter.taps(), BorderMode::Reflect101)
}

/// Blur `image` with a Gaussian of standard deviation `sigma`.
pub fn blur_gauss(image: &ImageF32, sigma: f32) -> Result<ImageF32> {
    apply(&GaussianFilter::new(sigma)?, image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_width_follows_three_sigma_rule() {
        assert_eq!(kernel_width(0.01), 3);
        assert_eq!(kernel_width(1.0), 7);
        assert_eq!(kernel_width(1.5), 11);
        assert_eq!(kernel_width(5.0), 31);
    }

    #[test]
    fn kernel_sums_to_one() {
        for sigma in [0.05f32, 0.5, 1.0, 2.3, 5.0, 12.0] {
            let k = gaussian_kernel(sigma).unwrap();
            assert_eq!(k.width(), kernel_width(sigma));
            assert!((k.sum() - 1.0).abs() < 1e-6, "sigma {sigma}: {}", k.sum());
            let filter = GaussianFilter::new(sigma).unwrap();
            let sum_1d: f64 = filter.taps().iter().map(|&t| t as f64).sum();
            assert!((sum_1d - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn invalid_sigma_is_rejected() {
        for sigma in [0.0f32, -1.0, f32::NAN, f32::INFINITY, 1e20, f32::MAX, MAX_SIGMA * 1.01] {
            assert!(matches!(
                GaussianFilter::new(sigma),
                Err(CannyError::InvalidSigma(_))
            ));
        }
        assert!(blur_gauss(&ImageF32::new(2, 2), 1e20).is_err());
        let widest = GaussianFilter::new(MAX_SIGMA).unwrap();
        assert_eq!(widest.taps().len(), 6001);
    }

    #[test]
    fn constant_image_is_unchanged() {
        let img = ImageF32::filled(9, 6, 0.37);
        for sigma in [0.5f32, 1.0, 3.0] {
            let out = blur_gauss(&img, sigma).unwrap();
            for &v in &out.data {
                assert!((v - 0.37).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn tiny_sigma_is_near_identity() {
        let img = ImageF32::from_fn(5, 5, |x, _| x as f32 / 4.0);
        let out = blur_gauss(&img, 0.01).unwrap();
        for (a, b) in out.data.iter().zip(&img.data) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn blur_spreads_an_impulse_symmetrically() {
        let mut img = ImageF32::new(9, 9);
        img.set(4, 4, 1.0);
        let out = blur_gauss(&img, 1.0).unwrap();
        assert!(out.get(4, 4) < 1.0);
        assert!((out.get(3, 4) - out.get(5, 4)).abs() < 1e-7);
        assert!((out.get(4, 3) - out.get(4, 5)).abs() < 1e-7);
        assert!(out.get(4, 4) > out.get(3, 4));
    }
}
