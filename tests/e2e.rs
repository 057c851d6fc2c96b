mod common;

use canny_edges::image::io::{load_grayscale_image, save_grayscale_f32};
use canny_edges::image::{ImageF32, MaskU8};
use canny_edges::stages::{non_max_suppression, sobel_gradients, ThresholdPair};
use canny_edges::{CannyDetector, CannyParams, ThresholdMode};
use common::init_logging;
use common::synthetic_image::{disc, from_profile, square, vertical_step};

fn fixed(low: f32, high: f32) -> ThresholdMode {
    ThresholdMode::Fixed(ThresholdPair::new(low, high).expect("valid thresholds"))
}

fn transpose(img: &ImageF32) -> ImageF32 {
    ImageF32::from_fn(img.h, img.w, |x, y| img.get(y, x))
}

fn transpose_mask(mask: &MaskU8) -> MaskU8 {
    let mut out = MaskU8::new(mask.h, mask.w);
    for y in 0..mask.h {
        for x in 0..mask.w {
            out.set(y, x, mask.get(x, y));
        }
    }
    out
}

#[test]
fn step_edge_yields_single_vertical_line() {
    init_logging();
    let image = from_profile(&[0.0, 0.0, 0.5, 1.0, 1.0], 5);
    let detector = CannyDetector::new(
        CannyParams::default()
            .with_sigma(0.01)
            .with_thresholds(fixed(0.1, 0.5)),
    )
    .expect("detector");
    let result = detector.detect(&image).expect("detection succeeds");

    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(result.edges.get(x, y), x == 2, "pixel ({x}, {y})");
        }
        assert!(result.gradient.orientation.get(2, y).abs() < 1e-6);
    }
    assert_eq!(result.report.edge_pixels, 5);
    assert_eq!(result.report.kept_components, 1);
}

#[test]
fn stages_compose_like_the_detector() {
    init_logging();
    let image = vertical_step(12, 8, 6, 0.0, 1.0);
    let grad = sobel_gradients(&image).expect("gradients");
    assert_eq!(grad.magnitude.max_value(), Some(1.0));
    let thin = non_max_suppression(&grad.magnitude, &grad.orientation).expect("nms");
    for y in 0..8 {
        let row: Vec<usize> = (0..12).filter(|&x| thin.get(x, y) > 0.0).collect();
        // the tie between columns 5 and 6 resolves to the right-hand pixel
        assert_eq!(row, vec![6]);
    }
}

#[test]
fn square_outline_is_thin_and_on_the_boundary() {
    init_logging();
    let image = square(32, 8, 0.1, 0.9);
    let detector = CannyDetector::new(
        CannyParams::default()
            .with_sigma(1.0)
            .with_thresholds(fixed(0.1, 0.3)),
    )
    .expect("detector");
    let result = detector.detect(&image).expect("detection succeeds");
    let edges = &result.edges;
    assert!(edges.count() > 0);

    let near_boundary = |v: usize| (5..=10).contains(&v) || (21..=26).contains(&v);
    for y in 0..32 {
        for x in 0..32 {
            if edges.get(x, y) {
                assert!(
                    near_boundary(x) || near_boundary(y),
                    "stray edge pixel at ({x}, {y})"
                );
            }
        }
    }

    // one pixel per side along the middle row and column
    let row: Vec<usize> = (0..32).filter(|&x| edges.get(x, 16)).collect();
    assert_eq!(row.len(), 2, "row 16: {row:?}");
    assert!((7..=8).contains(&row[0]) && (23..=24).contains(&row[1]));
    let col: Vec<usize> = (0..32).filter(|&y| edges.get(16, y)).collect();
    assert_eq!(col.len(), 2, "column 16: {col:?}");
}

#[test]
fn transposed_input_gives_transposed_edges() {
    init_logging();
    // the step is centred on column 6, so the ridge has a unique top
    let mut profile = vec![0.2f32; 6];
    profile.push(0.5);
    profile.extend([0.8f32; 7]);
    let image = from_profile(&profile, 10);
    let detector = CannyDetector::new(
        CannyParams::default()
            .with_sigma(1.2)
            .with_thresholds(fixed(0.2, 0.6)),
    )
    .expect("detector");
    let upright = detector.detect(&image).expect("upright");
    let flipped = detector.detect(&transpose(&image)).expect("transposed");
    assert_eq!(upright.report.edge_pixels, 10);
    assert!((0..10).all(|y| upright.edges.get(6, y)));
    assert_eq!(transpose_mask(&upright.edges), flipped.edges);
}

#[test]
fn auto_thresholds_grow_edges_with_low_prop() {
    init_logging();
    let image = disc(40, 12.5, 0.15, 0.85);
    let mut previous = 0usize;
    for low_prop in [0.2, 0.4, 0.6, 0.8, 1.0] {
        let detector = CannyDetector::new(CannyParams::default().with_sigma(1.5).with_thresholds(
            ThresholdMode::Auto {
                low_prop,
                high_prop: 0.1,
            },
        ))
        .expect("detector");
        let result = detector.detect(&image).expect("detection succeeds");
        let thresholds = result.report.thresholds.expect("disc has edges");
        assert!(thresholds.low() <= thresholds.high());
        let candidates = MaskU8::from_image(&result.suppressed, |v| v > thresholds.low());
        assert!(result.edges.is_subset_of(&candidates));
        assert!(result.report.edge_pixels >= previous, "low_prop {low_prop}");
        previous = result.report.edge_pixels;
    }
    assert!(previous > 0);
}

#[test]
fn png_round_trip_matches_in_memory_detection() {
    init_logging();
    let image = square(24, 6, 0.0, 1.0);
    let dir = std::env::temp_dir().join(format!("canny_e2e_{}", std::process::id()));
    let path = dir.join("square.png");
    save_grayscale_f32(&image, &path).expect("png written");
    let gray = load_grayscale_image(&path).expect("png read");

    let detector = CannyDetector::new(CannyParams::default().with_sigma(1.0)).expect("detector");
    let from_disk = detector.detect_u8(gray.as_view()).expect("from disk");
    let in_memory = detector.detect(&image).expect("in memory");
    assert_eq!(from_disk.edges, in_memory.edges);
    let _ = std::fs::remove_dir_all(&dir);
}
