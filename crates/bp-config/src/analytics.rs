//! Analytics thresholds.

use serde::{Deserialize, Serialize};

/// Categories with fewer entities than this are reported as gaps.
const fn default_low_coverage_threshold() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    #[serde(default = "default_low_coverage_threshold")]
    pub low_coverage_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            low_coverage_threshold: default_low_coverage_threshold(),
        }
    }
}
