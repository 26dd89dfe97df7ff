//! Column profiling: multi-signal scoring of every column for free-text
//! surveyworthiness.
//!
//! Four weighted signals: meaningful-text ratio, average length, value
//! uniqueness, and column-name relevance. The composite lands in [0,1] and
//! anything above the candidate threshold is worth extracting from.

use serde::Serialize;
use verbatim_core::dataset::{Column, Dataset};

use crate::columns;
use crate::policy::TextPolicy;

/// Column-name substrings suggesting free-text responses.
const RESPONSE_KEYWORDS: &[&str] = &[
    "response",
    "answer",
    "feedback",
    "comment",
    "text",
    "reply",
    "input",
    "message",
    "description",
    "detail",
    "explanation",
    "thoughts",
    "opinion",
    "suggestion",
    "improvement",
    "issue",
    "problem",
    "concern",
    "experience",
    "review",
    "note",
];

/// Column-name substrings suggesting the question side of a survey.
const QUESTION_KEYWORDS: &[&str] = &[
    "question", "prompt", "query", "ask", "title", "topic", "subject", "category", "type",
    "field", "label",
];

/// Column-name substrings suggesting metadata rather than answers.
const EXCLUDE_KEYWORDS: &[&str] = &[
    "timestamp",
    "time",
    "date",
    "id",
    "email",
    "name",
    "phone",
    "age",
    "gender",
    "location",
    "ip",
    "browser",
    "device",
    "score",
    "rating",
    "number",
    "count",
    "status",
    "completion",
];

/// Composite score weights.
const W_MEANINGFUL: f64 = 0.4;
const W_LENGTH: f64 = 0.3;
const W_UNIQUENESS: f64 = 0.2;
const W_NAME: f64 = 0.1;

/// Average-length normalization cap, in characters.
const LENGTH_CAP: f64 = 100.0;

/// Composite score above which a column is a text candidate.
pub const CANDIDATE_THRESHOLD: f64 = 0.1;

/// Derived per-column scoring record. Transient: recomputed on every
/// extraction call, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Export-artifact-free name for display (see `columns::clean_name`).
    pub display_name: String,
    pub non_null_count: usize,
    pub null_count: usize,
    pub distinct_count: usize,
    pub avg_len: f64,
    /// Composite text-quality score in [0,1].
    pub score: f64,
    pub is_candidate: bool,
    /// Human-readable reason the column was or wasn't selected.
    pub justification: String,
}

/// Score every column and return profiles ranked descending by composite
/// score (stable: dataset order breaks ties).
pub fn profile_dataset(dataset: &Dataset) -> Vec<ColumnProfile> {
    let mut profiles: Vec<ColumnProfile> =
        dataset.columns().iter().map(profile_column).collect();
    profiles.sort_by(|a, b| b.score.total_cmp(&a.score));
    profiles
}

pub fn profile_column(column: &Column) -> ColumnProfile {
    let policy = TextPolicy::strict();
    let non_null_count = column.non_null_count();
    let null_count = column.null_count();
    let distinct_count = column.distinct_count();

    if non_null_count == 0 {
        return ColumnProfile {
            name: column.name.clone(),
            display_name: columns::clean_name(&column.name),
            non_null_count,
            null_count,
            distinct_count,
            avg_len: 0.0,
            score: 0.0,
            is_candidate: false,
            justification: "column is empty".to_string(),
        };
    }

    let mut total_len = 0usize;
    let mut meaningful = 0usize;
    for value in column.non_null() {
        total_len += value.len();
        if policy.is_meaningful(value) {
            meaningful += 1;
        }
    }
    let avg_len = total_len as f64 / non_null_count as f64;

    let meaningful_ratio = meaningful as f64 / non_null_count as f64;
    let length_score = (avg_len / LENGTH_CAP).min(1.0);
    let uniqueness_score = (distinct_count as f64 / non_null_count as f64).min(1.0);
    let name_score = name_relevance(&column.name.to_lowercase());

    let score = meaningful_ratio * W_MEANINGFUL
        + length_score * W_LENGTH
        + uniqueness_score * W_UNIQUENESS
        + name_score * W_NAME;
    let is_candidate = score > CANDIDATE_THRESHOLD;

    let justification = justify(score, avg_len, distinct_count, non_null_count, name_score, is_candidate);

    ColumnProfile {
        name: column.name.clone(),
        display_name: columns::clean_name(&column.name),
        non_null_count,
        null_count,
        distinct_count,
        avg_len,
        score,
        is_candidate,
        justification,
    }
}

/// Name relevance in [0,1]: response keywords dominate, question keywords
/// count only when no response keyword matched, exclusion keywords penalize.
/// First match wins within each set.
fn name_relevance(name_lower: &str) -> f64 {
    let mut score: f64 = 0.0;

    let response_hit = RESPONSE_KEYWORDS.iter().any(|kw| name_lower.contains(kw));
    if response_hit {
        score += 0.8;
    } else if QUESTION_KEYWORDS.iter().any(|kw| name_lower.contains(kw)) {
        score += 0.3;
    }

    if EXCLUDE_KEYWORDS.iter().any(|kw| name_lower.contains(kw)) {
        score -= 0.5;
    }

    score.clamp(0.0, 1.0)
}

fn justify(
    score: f64,
    avg_len: f64,
    distinct: usize,
    non_null: usize,
    name_score: f64,
    is_candidate: bool,
) -> String {
    if !is_candidate {
        return if avg_len < 5.0 {
            "text too short for meaningful analysis".to_string()
        } else if distinct < 3 {
            "not enough distinct values".to_string()
        } else {
            "does not contain meaningful text content".to_string()
        };
    }

    let mut reasons = Vec::new();
    reasons.push(if score > 0.7 {
        "high-quality text content"
    } else if score > 0.5 {
        "good text content"
    } else {
        "basic text content"
    });

    if avg_len > 50.0 {
        reasons.push("detailed responses");
    } else if avg_len > 20.0 {
        reasons.push("moderate response length");
    }

    if distinct as f64 / non_null.max(1) as f64 > 0.8 {
        reasons.push("high variety");
    }

    if name_score > 0.5 {
        reasons.push("relevant column name");
    }

    format!("recommended: {}", reasons.join(", "))
}
