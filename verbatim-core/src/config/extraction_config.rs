use serde::{Deserialize, Serialize};

use super::defaults;

/// Response extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Platform-pass results below this count trigger the aggressive pass.
    pub min_platform_results: usize,
    /// Aggressive-pass results below this count trigger the generic pass.
    pub min_aggressive_results: usize,
    /// Column-name token Jaccard similarity above which columns are grouped.
    pub relatedness_threshold: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_platform_results: defaults::DEFAULT_MIN_PLATFORM_RESULTS,
            min_aggressive_results: defaults::DEFAULT_MIN_AGGRESSIVE_RESULTS,
            relatedness_threshold: defaults::DEFAULT_RELATEDNESS_THRESHOLD,
        }
    }
}
