//! Extraction passes, escalated in order of precision: platform-aware →
//! aggressive → generic column scoring.

pub mod aggressive;
pub mod generic;
pub mod platform_aware;

use std::collections::HashSet;

use verbatim_core::response::ExtractedResponse;

/// Deduplicate by exact text, preserving first-seen order.
pub(crate) fn dedup_responses(responses: Vec<ExtractedResponse>) -> Vec<ExtractedResponse> {
    let mut seen = HashSet::new();
    responses
        .into_iter()
        .filter(|r| seen.insert(r.text.clone()))
        .collect()
}
