//! Clustering result type.

use std::collections::BTreeMap;

use serde::Serialize;
use verbatim_core::constants::NOISE_LABEL;

use crate::engine::Method;

/// The result of one clustering run.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterOutcome {
    /// One label per input response, in input order. −1 marks noise
    /// (density method only).
    pub labels: Vec<i32>,
    /// Responses grouped by label, noise group included under −1.
    pub clusters: BTreeMap<i32, Vec<String>>,
    pub method: Method,
    /// The K the parametric method settled on; `None` for density.
    pub chosen_k: Option<usize>,
    /// Mean silhouette of the final assignment; `None` for density.
    pub silhouette: Option<f64>,
    pub noise_count: usize,
}

impl ClusterOutcome {
    pub fn is_noise_label(label: i32) -> bool {
        label == NOISE_LABEL
    }

    /// Number of real clusters; the noise group does not count.
    pub fn cluster_count(&self) -> usize {
        self.clusters
            .keys()
            .filter(|&&label| label != NOISE_LABEL)
            .count()
    }

    /// The noise group, if any responses were labeled noise.
    pub fn noise(&self) -> Option<&Vec<String>> {
        self.clusters.get(&NOISE_LABEL)
    }

    /// Total responses clustered, noise included.
    pub fn total_clustered(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping;

    #[test]
    fn cluster_count_excludes_noise() {
        let labels = vec![0, 1, -1, 0];
        let texts: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let outcome = ClusterOutcome {
            clusters: grouping::by_label(&labels, &texts),
            labels,
            method: Method::Density,
            chosen_k: None,
            silhouette: None,
            noise_count: 1,
        };
        assert_eq!(outcome.cluster_count(), 2);
        assert_eq!(outcome.noise(), Some(&vec!["c".to_string()]));
        assert_eq!(outcome.total_clustered(), 4);
    }

    #[test]
    fn noise_label_predicate() {
        assert!(ClusterOutcome::is_noise_label(-1));
        assert!(!ClusterOutcome::is_noise_label(0));
    }
}
