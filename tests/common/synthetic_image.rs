use canny_edges::image::ImageF32;

/// Vertical step: columns left of `edge_x` are `lo`, the rest `hi`.
pub fn vertical_step(width: usize, height: usize, edge_x: usize, lo: f32, hi: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageF32::from_fn(width, height, |x, _| if x < edge_x { lo } else { hi })
}

/// Image rows built from a single intensity profile repeated `height` times.
pub fn from_profile(profile: &[f32], height: usize) -> ImageF32 {
    ImageF32::from_fn(profile.len(), height, |x, _| profile[x])
}

/// Bright axis-aligned square on a dark background.
pub fn square(size: usize, margin: usize, lo: f32, hi: f32) -> ImageF32 {
    assert!(2 * margin < size, "square must fit inside the image");
    ImageF32::from_fn(size, size, |x, y| {
        let inside = (margin..size - margin).contains(&x) && (margin..size - margin).contains(&y);
        if inside {
            hi
        } else {
            lo
        }
    })
}

/// Filled disc of radius `r` centred in the image.
pub fn disc(size: usize, r: f32, lo: f32, hi: f32) -> ImageF32 {
    let c = (size as f32 - 1.0) / 2.0;
    ImageF32::from_fn(size, size, |x, y| {
        let dx = x as f32 - c;
        let dy = y as f32 - c;
        if dx * dx + dy * dy <= r * r {
            hi
        } else {
            lo
        }
    })
}
