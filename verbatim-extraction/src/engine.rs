//! Extraction engine: runs the escalation policy across passes and builds
//! the diagnostics report.

use tracing::{debug, info};
use verbatim_core::config::ExtractionConfig;
use verbatim_core::constants::MIN_RESPONSES_FOR_CLUSTERING;
use verbatim_core::dataset::Dataset;
use verbatim_core::response::ExtractedResponse;

use crate::columns;
use crate::pipeline::{aggressive, generic, platform_aware};
use crate::platform;
use crate::profile;
use crate::report::{ExtractionReport, StageCount, StrategyKind};

/// Adaptive response extraction over arbitrary tabular survey exports.
///
/// Escalation: platform-aware first; below `min_platform_results` the
/// aggressive pass runs; still below `min_aggressive_results` the generic
/// column-scoring pass runs as a last resort. The largest result set wins,
/// earlier (higher-precision) stages winning ties.
pub struct ExtractionEngine {
    config: ExtractionConfig,
}

impl ExtractionEngine {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract deduplicated responses plus a full diagnostics report.
    ///
    /// An empty dataset or one with no extractable text is a normal "no data
    /// found" outcome: empty responses, `is_sufficient == false`, no error.
    pub fn extract(&self, dataset: &Dataset) -> (Vec<ExtractedResponse>, ExtractionReport) {
        let detected = platform::detect(dataset);
        let profiles = profile::profile_dataset(dataset);
        let skipped_columns = dataset
            .columns()
            .iter()
            .filter(|c| columns::should_skip(&c.name))
            .count();
        let mut stages = Vec::new();

        if dataset.is_empty() {
            debug!("empty dataset, nothing to extract");
            let report = ExtractionReport {
                platform: detected,
                strategy: StrategyKind::PlatformAware,
                stages,
                total_rows: dataset.n_rows(),
                total_columns: dataset.n_columns(),
                profiles,
                skipped_columns,
                response_count: 0,
                is_sufficient: false,
            };
            return (Vec::new(), report);
        }

        let pa = platform_aware::run(dataset, self.config.relatedness_threshold);
        stages.push(StageCount {
            strategy: StrategyKind::PlatformAware,
            produced: pa.responses.len(),
        });
        let mut strategy = StrategyKind::PlatformAware;
        let mut responses = pa.responses;

        if responses.len() < self.config.min_platform_results {
            let ag = aggressive::run(dataset, self.config.relatedness_threshold);
            stages.push(StageCount {
                strategy: StrategyKind::Aggressive,
                produced: ag.responses.len(),
            });
            if ag.responses.len() > responses.len() {
                strategy = StrategyKind::Aggressive;
                responses = ag.responses;
            }

            if responses.len() < self.config.min_aggressive_results {
                let gn = generic::run(dataset, &profiles);
                stages.push(StageCount {
                    strategy: StrategyKind::Generic,
                    produced: gn.responses.len(),
                });
                if gn.responses.len() > responses.len() {
                    strategy = StrategyKind::Generic;
                    responses = gn.responses;
                }
            }
        }

        let is_sufficient = responses.len() >= MIN_RESPONSES_FOR_CLUSTERING;
        info!(
            platform = ?detected,
            strategy = ?strategy,
            responses = responses.len(),
            is_sufficient,
            "extraction complete"
        );

        let report = ExtractionReport {
            platform: detected,
            strategy,
            stages,
            total_rows: dataset.n_rows(),
            total_columns: dataset.n_columns(),
            profiles,
            skipped_columns,
            response_count: responses.len(),
            is_sufficient,
        };
        (responses, report)
    }
}

impl Default for ExtractionEngine {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

/// Extract with the default configuration.
pub fn extract_responses(dataset: &Dataset) -> (Vec<ExtractedResponse>, ExtractionReport) {
    ExtractionEngine::default().extract(dataset)
}
