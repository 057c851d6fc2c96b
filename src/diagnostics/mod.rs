//! Run diagnostics: stage timings and the serializable [`CannyReport`]
//! returned with every detection.

pub mod report;
pub mod timing;

pub use report::CannyReport;
pub use timing::{StageTiming, TimingBreakdown};
