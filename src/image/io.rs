//! I/O helpers for grayscale images, edge masks and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG into an owned 8-bit gray buffer.
//! - `save_grayscale_f32`: write an `ImageF32` in `[0, 1]` to a grayscale PNG.
//! - `save_mask`: write a binary edge mask as black/white PNG.
//! - `save_orientation`: map orientations in (-π, π] to gray levels.
//! - `save_overlay`: paint edge pixels red on top of the grayscale source.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageF32, ImageU8, ImageView, MaskU8};
use image::{GrayImage, Luma, Rgb, RgbImage};
use serde::Serialize;
use std::f32::consts::PI;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayImageU8::new(width, height, data))
}

/// Save a float image to a grayscale PNG, clamping values in [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), String> {
    save_gray_with(image, path, |v| v)
}

/// Save an orientation image with angles in (-π, π] mapped linearly to [0, 1].
pub fn save_orientation(orientation: &ImageF32, path: &Path) -> Result<(), String> {
    save_gray_with(orientation, path, |a| (a + PI) / (2.0 * PI))
}

/// Save a binary mask as a black/white PNG.
pub fn save_mask(mask: &MaskU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(mask.w as u32, mask.h as u32);
    for (y, row) in mask.rows().enumerate() {
        for (x, &on) in row.iter().enumerate() {
            let v = if on != 0 { 255 } else { 0 };
            out.put_pixel(x as u32, y as u32, Luma([v]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save the grayscale `base` as RGB with every edge pixel painted pure red.
pub fn save_overlay(base: &ImageF32, edges: &MaskU8, path: &Path) -> Result<(), String> {
    if base.dims() != edges.dims() {
        return Err(format!(
            "Overlay size mismatch: image {}x{}, edges {}x{}",
            base.w, base.h, edges.w, edges.h
        ));
    }
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(base.w as u32, base.h as u32);
    for y in 0..base.h {
        let row = base.row(y);
        let edge_row = edges.row(y);
        for (x, (&px, &on)) in row.iter().zip(edge_row).enumerate() {
            let pixel = if on != 0 {
                Rgb([255, 0, 0])
            } else {
                let v = to_u8(px);
                Rgb([v, v, v])
            };
            out.put_pixel(x as u32, y as u32, pixel);
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn save_gray_with(image: &ImageF32, path: &Path, f: impl Fn(f32) -> f32) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Luma([to_u8(f(px))]));
        }
    }
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
