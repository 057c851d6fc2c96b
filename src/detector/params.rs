//! Parameter types configuring the detector stages.
//!
//! Two knobs matter: the blur scale σ and how the hysteresis thresholds are
//! chosen. Connectivity for hysteresis is fixed at 8.

use crate::threshold::ThresholdPair;
use serde::{Deserialize, Serialize};

/// How hysteresis thresholds are obtained.
///
/// Serialized externally tagged, e.g. `{"fixed": {"low": 0.5, "high": 0.6}}`
/// or `{"auto": {"low_prop": 0.3, "high_prop": 0.1}}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdMode {
    /// Use the given pair as is.
    Fixed(ThresholdPair),
    /// Derive thresholds from the proportion of non-zero edge pixels that
    /// should lie above each of them. `high_prop <= low_prop` is the useful
    /// regime.
    Auto { low_prop: f64, high_prop: f64 },
}

impl Default for ThresholdMode {
    fn default() -> Self {
        ThresholdMode::Auto {
            low_prop: 0.3,
            high_prop: 0.1,
        }
    }
}

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannyParams {
    /// Standard deviation of the Gaussian blur applied before differentiation.
    pub sigma: f32,
    /// Threshold selection for the hysteresis stage.
    pub thresholds: ThresholdMode,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            sigma: 2.0,
            thresholds: ThresholdMode::default(),
        }
    }
}

impl CannyParams {
    pub fn with_sigma(mut self, sigma: f32) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_thresholds(mut self, thresholds: ThresholdMode) -> Self {
        self.thresholds = thresholds;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let params: CannyParams = serde_json::from_str(r#"{"sigma": 1.5}"#).unwrap();
        assert_eq!(params.sigma, 1.5);
        assert_eq!(params.thresholds, ThresholdMode::default());
        let params: CannyParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, CannyParams::default());
    }

    #[test]
    fn threshold_modes_parse() {
        let fixed: ThresholdMode =
            serde_json::from_str(r#"{"fixed": {"low": 0.5, "high": 0.6}}"#).unwrap();
        assert_eq!(
            fixed,
            ThresholdMode::Fixed(ThresholdPair::new(0.5, 0.6).unwrap())
        );
        let auto: ThresholdMode =
            serde_json::from_str(r#"{"auto": {"low_prop": 0.4, "high_prop": 0.2}}"#).unwrap();
        assert_eq!(
            auto,
            ThresholdMode::Auto {
                low_prop: 0.4,
                high_prop: 0.2
            }
        );
        assert!(serde_json::from_str::<ThresholdMode>(r#"{"fixed": {"low": 0.9, "high": 0.1}}"#)
            .is_err());
    }
}
