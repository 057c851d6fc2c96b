//! JSON configuration for the command-line tools.

pub mod canny;

pub use canny::{load_config, CannyOutputConfig, CannyToolConfig};
