//! Platform-aware pass: open-ended indicator columns, other-specify
//! columns, and row-wise combinations over related column groups, merged in
//! priority order.

use tracing::debug;
use verbatim_core::dataset::Dataset;
use verbatim_core::response::{ExtractedResponse, ExtractionMethod};

use crate::columns;
use crate::policy::TextPolicy;

/// Column-name phrases that indicate an open-ended answer column.
const RESPONSE_INDICATORS: &[&str] = &[
    "additional comments",
    "feedback",
    "suggestions",
    "improvements",
    "other (please specify)",
    "open-ended",
    "anything else",
    "would like to share",
    "device needs",
    "comments",
    "what would encourage",
    "main reasons",
    "type of",
];

/// Minimum text lengths applied at merge time (exclusive).
const OPEN_ENDED_MIN_LEN: usize = 5;
const OTHER_SPECIFY_MIN_LEN: usize = 3;
const COMBINED_MIN_LEN: usize = 5;

/// Combined responses are only appended while the merged total is below this.
const COMBINED_FILL_TARGET: usize = 10;

#[derive(Debug)]
pub struct PlatformPassOutput {
    pub open_ended: usize,
    pub other_specify: usize,
    pub combined: usize,
    pub responses: Vec<ExtractedResponse>,
}

pub fn run(dataset: &Dataset, relatedness_threshold: f64) -> PlatformPassOutput {
    let policy = TextPolicy::lenient();

    let open_ended = extract_open_ended(dataset, policy);
    let other_specify = extract_other_specify(dataset, policy);
    let combined = extract_combined_groups(dataset, policy, relatedness_threshold);
    debug!(
        open_ended = open_ended.len(),
        other_specify = other_specify.len(),
        combined = combined.len(),
        "platform-aware pass stage counts"
    );

    // Merge in priority order; combined responses only fill a shortfall.
    let mut merged = Vec::new();
    merged.extend(
        open_ended
            .iter()
            .filter(|r| r.text.len() > OPEN_ENDED_MIN_LEN)
            .cloned(),
    );
    merged.extend(
        other_specify
            .iter()
            .filter(|r| r.text.len() > OTHER_SPECIFY_MIN_LEN)
            .cloned(),
    );
    if merged.len() < COMBINED_FILL_TARGET {
        merged.extend(
            combined
                .iter()
                .filter(|r| r.text.len() > COMBINED_MIN_LEN)
                .cloned(),
        );
    }

    let responses = super::dedup_responses(merged);
    PlatformPassOutput {
        open_ended: open_ended.len(),
        other_specify: other_specify.len(),
        combined: combined.len(),
        responses,
    }
}

fn extract_open_ended(dataset: &Dataset, policy: TextPolicy) -> Vec<ExtractedResponse> {
    let mut out = Vec::new();
    for column in dataset.columns() {
        let lower = column.name.to_lowercase();
        if !RESPONSE_INDICATORS.iter().any(|ind| lower.contains(ind)) {
            continue;
        }
        for value in column.non_null() {
            if policy.is_meaningful(value) {
                out.push(ExtractedResponse::new(
                    value,
                    vec![column.name.clone()],
                    ExtractionMethod::OpenEnded,
                ));
            }
        }
    }
    out
}

fn extract_other_specify(dataset: &Dataset, policy: TextPolicy) -> Vec<ExtractedResponse> {
    let mut out = Vec::new();
    for column in dataset.columns() {
        let lower = column.name.to_lowercase();
        if !(lower.contains("other") && (lower.contains("specify") || lower.contains("please"))) {
            continue;
        }
        for value in column.non_null() {
            if policy.is_meaningful(value) {
                out.push(ExtractedResponse::new(
                    value,
                    vec![column.name.clone()],
                    ExtractionMethod::OtherSpecify,
                ));
            }
        }
    }
    out
}

/// Row-wise combination across related column groups; emits only rows with
/// at least two meaningful values.
fn extract_combined_groups(
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
                    ExtractionMethod::CombinedGroup,
                ));
            }
        }
    }
    out
}
