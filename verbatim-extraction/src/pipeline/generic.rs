//! Generic column-scoring fallback: extract from the single top-ranked
//! candidate column, or pipe-join all candidate columns per row when the
//! best column yields nothing usable.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use verbatim_core::dataset::Dataset;
use verbatim_core::response::{ExtractedResponse, ExtractionMethod};

use crate::policy::TextPolicy;
use crate::profile::ColumnProfile;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Cells shorter than this are dropped before cleaning.
const RAW_MIN_LEN: usize = 3;

#[derive(Debug)]
pub struct GenericPassOutput {
    /// The column the responses were taken from, when a single best column
    /// produced them.
    pub best_column: Option<String>,
    pub responses: Vec<ExtractedResponse>,
}

/// `profiles` must be ranked descending by score (see `profile_dataset`).
pub fn run(dataset: &Dataset, profiles: &[ColumnProfile]) -> GenericPassOutput {
    let Some(best) = profiles.iter().find(|p| p.is_candidate) else {
        return GenericPassOutput {
            best_column: None,
            responses: Vec::new(),
        };
    };

    let from_best = extract_column(dataset, &best.name);
    if !from_best.is_empty() {
        debug!(column = %best.name, responses = from_best.len(), "generic pass used best column");
        return GenericPassOutput {
            best_column: Some(best.name.clone()),
            responses: super::dedup_responses(from_best),
        };
    }

    // Best column produced nothing usable; fall back to combining every
    // candidate column per row.
    let combined = combine_candidates(dataset, profiles);
    debug!(responses = combined.len(), "generic pass combined candidate columns");
    GenericPassOutput {
        best_column: None,
        responses: super::dedup_responses(combined),
    }
}

/// Clean and filter one column's cells with the strict policy.
fn extract_column(dataset: &Dataset, name: &str) -> Vec<ExtractedResponse> {
    let policy = TextPolicy::strict();
    let Some(column) = dataset.column(name) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for value in column.non_null() {
        if value.len() < RAW_MIN_LEN {
            continue;
        }
        let cleaned = WHITESPACE_RE.replace_all(value, " ").trim().to_string();
        if !policy.is_meaningful(&cleaned) {
            continue;
        }
        out.push(ExtractedResponse::new(
            cleaned,
            vec![name.to_string()],
            ExtractionMethod::BestColumn,
        ));
    }
    out
}

/// Pipe-join per-row meaningful values across all candidate columns.
fn combine_candidates(dataset: &Dataset, profiles: &[ColumnProfile]) -> Vec<ExtractedResponse> {
    let policy = TextPolicy::lenient();
    let candidates: Vec<&str> = profiles
        .iter()
        .filter(|p| p.is_candidate)
        .map(|p| p.name.as_str())
        .collect();

    let indices: Vec<usize> = (0..dataset.n_columns())
        .filter(|&ci| candidates.contains(&dataset.columns()[ci].name.as_str()))
        .collect();

    let mut out = Vec::new();
    for row in 0..dataset.n_rows() {
        let mut parts = Vec::new();
        let mut sources = Vec::new();
        for &ci in &indices {
            if let Some(value) = dataset.cell(ci, row) {
                if policy.is_meaningful(value) {
                    parts.push(value);
                    sources.push(dataset.columns()[ci].name.clone());
                }
            }
        }
        if !parts.is_empty() {
            out.push(ExtractedResponse::new(
                parts.join(" | "),
                sources,
                ExtractionMethod::CombinedColumns,
            ));
        }
    }
    out
}
