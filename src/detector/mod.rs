pub mod params;
pub mod pipeline;

pub use params::{CannyParams, ThresholdMode};
pub use pipeline::{CannyDetector, CannyResult};
