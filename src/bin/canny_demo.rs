use canny_edges::config::{load_config, CannyToolConfig};
use canny_edges::diagnostics::CannyReport;
use canny_edges::edges::{edge_elements, EdgeElement};
use canny_edges::image::io::{
    load_grayscale_image, save_grayscale_f32, save_mask, save_orientation, save_overlay,
    write_json_file,
};
use canny_edges::image::ImageF32;
use canny_edges::CannyDetector;
use serde::Serialize;
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config: CannyToolConfig = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let image: ImageF32 = gray.as_view().to_f32();
    let detector = CannyDetector::new(config.detector.clone()).map_err(|e| e.to_string())?;
    let result = detector.detect(&image).map_err(|e| e.to_string())?;

    let out = &config.output;
    save_mask(&result.edges, &out.edges_image)?;
    if let Some(path) = &out.blurred_image {
        save_grayscale_f32(&result.blurred, path)?;
    }
    if let Some(path) = &out.gradient_image {
        save_grayscale_f32(&result.gradient.magnitude, path)?;
    }
    if let Some(path) = &out.orientation_image {
        save_orientation(&result.gradient.orientation, path)?;
    }
    if let Some(path) = &out.suppressed_image {
        save_grayscale_f32(&result.suppressed, path)?;
    }
    if let Some(path) = &out.overlay_image {
        save_overlay(&image, &result.edges, path)?;
    }
    if let Some(path) = &out.report_json {
        let edges = out.include_edge_list.then(|| {
            edge_elements(
                &result.edges,
                &result.gradient.magnitude,
                &result.gradient.orientation,
            )
        });
        let summary = EdgeDetectionSummary {
            input: config.input.display().to_string(),
            report: &result.report,
            edges,
        };
        write_json_file(path, &summary)?;
        println!("Saved report to {}", path.display());
    }

    println!(
        "Saved {} edge pixels ({} components) to {}",
        result.report.edge_pixels,
        result.report.kept_components,
        out.edges_image.display()
    );
    match result.report.thresholds {
        Some(t) => println!("Thresholds: low={:.4} high={:.4}", t.low(), t.high()),
        None => println!("No edge strength in the image, edge map is empty"),
    }

    Ok(())
}

fn usage() -> String {
    "Usage: canny_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeDetectionSummary<'a> {
    input: String,
    report: &'a CannyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    edges: Option<Vec<EdgeElement>>,
}
