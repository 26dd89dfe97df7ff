//! Column-name utilities: metadata skip list, artifact cleanup, and
//! relatedness grouping by name-token overlap.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use verbatim_core::dataset::Dataset;

/// Lowercase substrings that mark a column as survey metadata, never mined
/// for responses.
const SKIP_KEYWORDS: &[&str] = &[
    "respondent",
    "collector",
    "start",
    "end",
    "ip",
    "email",
    "first",
    "last",
    "custom data",
    "timestamp",
    "id",
    "date",
    "time",
];

static SELECT_ALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(select all that apply\)").expect("valid regex"));
static PLEASE_SPECIFY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(please specify\)").expect("valid regex"));
static UNNAMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)unnamed:\s*\d+").expect("valid regex"));

/// Maximum cleaned column-name length kept for diagnostics.
const MAX_NAME_LEN: usize = 60;

pub fn should_skip(name: &str) -> bool {
    let lower = name.to_lowercase();
    SKIP_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Strip survey-platform artifacts from a column name and truncate it.
pub fn clean_name(name: &str) -> String {
    let cleaned = SELECT_ALL_RE.replace_all(name, "");
    let cleaned = PLEASE_SPECIFY_RE.replace_all(&cleaned, "");
    let cleaned = UNNAMED_RE.replace_all(&cleaned, "Additional Field");
    let cleaned = cleaned.trim();
    if cleaned.len() > MAX_NAME_LEN {
        let cut: String = cleaned.chars().take(MAX_NAME_LEN - 3).collect();
        format!("{}...", cut.trim_end())
    } else {
        cleaned.to_string()
    }
}

/// Jaccard similarity of the lowercase whitespace-token sets of two names.
pub fn jaccard(a: &str, b: &str) -> f64 {
    let ta: HashSet<String> = a.to_lowercase().split_whitespace().map(String::from).collect();
    let tb: HashSet<String> = b.to_lowercase().split_whitespace().map(String::from).collect();
    let union = ta.union(&tb).count();
    if union == 0 {
        return 0.0;
    }
    ta.intersection(&tb).count() as f64 / union as f64
}

/// Group non-metadata columns whose names overlap above `threshold`.
///
/// Greedy single-pass: each unprocessed column seeds a group and claims every
/// later column related to it. Only groups of two or more are returned, as
/// index lists in dataset order.
pub fn group_related(dataset: &Dataset, threshold: f64) -> Vec<Vec<usize>> {
    let names: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
    let mut processed = vec![false; names.len()];
    let mut groups = Vec::new();

    for i in 0..names.len() {
        if processed[i] || should_skip(names[i]) {
            continue;
        }
        let mut group = vec![i];
        for j in (i + 1)..names.len() {
            if processed[j] || should_skip(names[j]) {
                continue;
            }
            if jaccard(names[i], names[j]) > threshold {
                group.push(j);
                processed[j] = true;
            }
        }
        processed[i] = true;
        if group.len() > 1 {
            groups.push(group);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use verbatim_core::dataset::Column;

    #[test]
    fn skip_list_matches_substrings() {
        assert!(should_skip("Respondent ID"));
        assert!(should_skip("Start Date"));
        assert!(should_skip("Email Address"));
        assert!(!should_skip("Additional comments"));
    }

    #[test]
    fn clean_name_strips_artifacts() {
        assert_eq!(
            clean_name("Devices owned (select all that apply)"),
            "Devices owned"
        );
        assert_eq!(clean_name("Unnamed: 12"), "Additional Field");
    }

    #[test]
    fn clean_name_truncates_long_names() {
        let long = "a".repeat(80);
        let cleaned = clean_name(&long);
        assert!(cleaned.len() <= 60);
        assert!(cleaned.ends_with("..."));
    }

    #[test]
    fn jaccard_of_identical_names_is_one() {
        assert!((jaccard("device needs", "Device Needs") - 1.0).abs() < 1e-9);
    }

    #[test]
    fn jaccard_of_disjoint_names_is_zero() {
        assert_eq!(jaccard("price feedback", "shipping speed"), 0.0);
    }

    #[test]
    fn groups_related_columns_only() {
        let ds = Dataset::new(vec![
            Column::new("hardware needs today", vec![]),
            Column::new("hardware needs future", vec![]),
            Column::new("shipping speed", vec![]),
            Column::new("Respondent ID", vec![]),
        ]);
        let groups = group_related(&ds, 0.3);
        assert_eq!(groups, vec![vec![0, 1]]);
    }
}
