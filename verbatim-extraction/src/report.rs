//! Extraction diagnostics: which strategy produced the responses, per-stage
//! counts, and the full column scoring so callers can see why a column was
//! or wasn't selected.

use serde::Serialize;

use crate::platform::Platform;
use crate::profile::ColumnProfile;

/// Which extraction strategy a result set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    PlatformAware,
    Aggressive,
    Generic,
}

/// How many responses one strategy produced (post-dedup).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StageCount {
    pub strategy: StrategyKind,
    pub produced: usize,
}

/// Full diagnostics for one extraction call.
#[derive(Debug, Serialize)]
pub struct ExtractionReport {
    /// Detected platform family (advisory).
    pub platform: Platform,
    /// Strategy whose responses were kept.
    pub strategy: StrategyKind,
    /// Every strategy that ran, in escalation order.
    pub stages: Vec<StageCount>,
    pub total_rows: usize,
    pub total_columns: usize,
    /// Column scoring, ranked descending by composite score.
    pub profiles: Vec<ColumnProfile>,
    /// Columns the skip list removed from consideration (metadata).
    pub skipped_columns: usize,
    /// Final response count after dedup.
    pub response_count: usize,
    /// False below the clustering floor. Callers must treat this as a hard
    /// stop and request different input or a manual column choice.
    pub is_sufficient: bool,
}
