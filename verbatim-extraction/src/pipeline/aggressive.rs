//! Aggressive pass: every meaningful cell from non-metadata columns, plus
//! contextual (related-group) and multi-part (whole-row) combinations.
//!
//! Recall-first: runs when the platform-aware pass finds too little.

use tracing::debug;
use verbatim_core::dataset::Dataset;
use verbatim_core::response::{ExtractedResponse, ExtractionMethod};

use crate::columns;
use crate::policy::TextPolicy;

/// Values shorter than this (exclusive) are skipped for multi-part rows.
const MULTI_PART_MIN_LEN: usize = 5;

#[derive(Debug)]
pub struct AggressivePassOutput {
    pub column_scan: usize,
    pub contextual: usize,
    pub multi_part: usize,
    pub skipped_columns: usize,
    pub responses: Vec<ExtractedResponse>,
}

pub fn run(dataset: &Dataset, relatedness_threshold: f64) -> AggressivePassOutput {
    let policy = TextPolicy::lenient();

    let (column_scan, skipped_columns) = scan_columns(dataset, policy);
    let contextual = combine_groups(dataset, policy, relatedness_threshold);
    let multi_part = combine_rows(dataset, policy);
    debug!(
        column_scan = column_scan.len(),
        contextual = contextual.len(),
        multi_part = multi_part.len(),
        skipped_columns,
        "aggressive pass stage counts"
    );

    let mut merged = column_scan.clone();
    merged.extend(contextual.iter().cloned());
    merged.extend(multi_part.iter().cloned());
    let responses: Vec<ExtractedResponse> = super::dedup_responses(merged)
        .into_iter()
        .filter(|r| r.text.trim().len() > 1)
        .collect();

    AggressivePassOutput {
        column_scan: column_scan.len(),
        contextual: contextual.len(),
        multi_part: multi_part.len(),
        skipped_columns,
        responses,
    }
}

/// Every meaningful cell from every non-metadata column.
fn scan_columns(dataset: &Dataset, policy: TextPolicy) -> (Vec<ExtractedResponse>, usize) {
    let mut out = Vec::new();
    let mut skipped = 0usize;
    for column in dataset.columns() {
        if columns::should_skip(&column.name) {
            skipped += 1;
            continue;
        }
        for value in column.non_null() {
            if policy.is_meaningful(value) {
                out.push(ExtractedResponse::new(
                    value,
                    vec![column.name.clone()],
                    ExtractionMethod::ColumnScan,
                ));
            }
        }
    }
    (out, skipped)
}

/// Row-wise combinations over related column groups (two or more meaningful
/// values per row required).
fn combine_groups(
    dataset: &Dataset,
    policy: TextPolicy,
    threshold: f64,
) -> Vec<ExtractedResponse> {
    let mut out = Vec::new();
    for group in columns::group_related(dataset, threshold) {
        for row in 0..dataset.n_rows() {
            let mut parts = Vec::new();
            let mut sources = Vec::new();
            for &ci in &group {
                if let Some(value) = dataset.cell(ci, row) {
                    if policy.is_meaningful(value) {
                        parts.push(value);
                        sources.push(dataset.columns()[ci].name.clone());
                    }
                }
            }
            if parts.len() >= 2 {
                out.push(ExtractedResponse::new(
                    parts.join(" | "),
                    sources,
                    ExtractionMethod::Contextual,
                ));
            }
        }
    }
    out
}

/// Per-row combination across all non-metadata columns, keeping only values
/// longer than the multi-part floor and rows with at least two of them.
fn combine_rows(dataset: &Dataset, policy: TextPolicy) -> Vec<ExtractedResponse> {
    let keep: Vec<usize> = (0..dataset.n_columns())
        .filter(|&ci| !columns::should_skip(&dataset.columns()[ci].name))
        .collect();

    let mut out = Vec::new();
    for row in 0..dataset.n_rows() {
        let mut parts = Vec::new();
        let mut sources = Vec::new();
        for &ci in &keep {
            if let Some(value) = dataset.cell(ci, row) {
                if policy.is_meaningful(value) && value.len() > MULTI_PART_MIN_LEN {
                    parts.push(value);
                    sources.push(dataset.columns()[ci].name.clone());
                }
            }
        }
        if parts.len() >= 2 {
            out.push(ExtractedResponse::new(
                parts.join(" | "),
                sources,
                ExtractionMethod::MultiPart,
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbatim_core::dataset::Column;

    fn text_col(name: &str, values: &[&str]) -> Column {
        Column::new(name, values.iter().map(|v| Some(v.to_string())).collect())
    }

    #[test]
    fn metadata_columns_are_skipped() {
        let ds = Dataset::new(vec![
            text_col("Respondent ID", &["r1", "r2"]),
            text_col("Email", &["a@x.com", "b@x.com"]),
            text_col("Reasons for leaving", &["pricing went up", "missing features"]),
        ]);
        let out = run(&ds, 0.3);
        assert_eq!(out.skipped_columns, 2);
        assert!(!out.responses.is_empty());
        assert!(out
            .responses
            .iter()
            .all(|r| r.source_columns == vec!["Reasons for leaving".to_string()]));
    }

    #[test]
    fn multi_part_requires_two_long_values() {
        let ds = Dataset::new(vec![
            text_col("Likes about product", &["build quality", "ok"]),
            text_col("Dislikes about product", &["battery life", "price"]),
        ]);
        let out = run(&ds, 0.9);
        // Row 0: both values pass the multi-part floor; row 1: "ok" and
        // "price" fail it (too short).
        let multi: Vec<_> = out
            .responses
            .iter()
            .filter(|r| r.method == ExtractionMethod::MultiPart)
            .collect();
        assert_eq!(multi.len(), 1);
        assert_eq!(multi[0].text, "build quality | battery life");
    }

    #[test]
    fn denylist_cells_never_extracted() {
        let ds = Dataset::new(vec![text_col("Any comments", &["n/a", "yes", "loved it"])]);
        let out = run(&ds, 0.3);
        assert_eq!(out.responses.len(), 1);
        assert_eq!(out.responses[0].text, "loved it");
    }
}
