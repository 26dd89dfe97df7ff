//! Deterministic label-to-responses grouping.

use std::collections::BTreeMap;

/// Group texts by cluster label in lock-step with `labels`.
///
/// Labels are preserved exactly as the algorithm produced them, noise (−1)
/// included. The `BTreeMap` keeps iteration order stable across runs.
pub fn by_label(labels: &[i32], texts: &[String]) -> BTreeMap<i32, Vec<String>> {
    let mut groups: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for (label, text) in labels.iter().zip(texts) {
        groups.entry(*label).or_default().push(text.clone());
    }
    groups
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grouping_is_a_complete_partition(labels in proptest::collection::vec(-1i32..4, 0..40)) {
            let texts: Vec<String> = (0..labels.len()).map(|i| format!("t{i}")).collect();
            let groups = by_label(&labels, &texts);

            let total: usize = groups.values().map(Vec::len).sum();
            prop_assert_eq!(total, labels.len());
            for (label, text) in labels.iter().zip(&texts) {
                prop_assert!(groups[label].contains(text));
            }
        }
    }
}
