use crate::detector::CannyParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `canny_demo` tool.
///
/// ```json
/// {
///   "input": "images/rubens.jpg",
///   "detector": { "sigma": 2.0, "thresholds": { "auto": { "low_prop": 0.3, "high_prop": 0.1 } } },
///   "output": { "edges_image": "out/edges.png", "report_json": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct CannyToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: CannyParams,
    pub output: CannyOutputConfig,
}

/// Output paths; everything but the edge map is optional.
#[derive(Debug, Deserialize)]
pub struct CannyOutputConfig {
    pub edges_image: PathBuf,
    #[serde(default)]
    pub blurred_image: Option<PathBuf>,
    #[serde(default)]
    pub gradient_image: Option<PathBuf>,
    #[serde(default)]
    pub orientation_image: Option<PathBuf>,
    #[serde(default)]
    pub suppressed_image: Option<PathBuf>,
    /// Edge pixels drawn in red over the input
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    /// Include the per-pixel edge list in the JSON report
    #[serde(default)]
    pub include_edge_list: bool,
}

pub fn load_config(path: &Path) -> Result<CannyToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
