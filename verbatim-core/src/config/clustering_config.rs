use serde::{Deserialize, Serialize};

use super::defaults;

/// Clustering subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Upper bound of the silhouette K search (inclusive).
    pub max_clusters: usize,
    /// Minimum cluster size for the density algorithm.
    pub min_cluster_size: usize,
    /// Target dimensionality before density clustering.
    pub reduced_dimensions: usize,
    /// Seed for centroid initialization. Reproducibility across runs
    /// requires pinning the same seed; cluster labels have no cross-run
    /// identity regardless.
    pub seed: u64,
    /// K-means iteration cap.
    pub max_iterations: u64,
    /// K-means convergence tolerance.
    pub tolerance: f64,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            max_clusters: defaults::DEFAULT_MAX_CLUSTERS,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            reduced_dimensions: defaults::DEFAULT_REDUCED_DIMENSIONS,
            seed: defaults::DEFAULT_RANDOM_SEED,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_TOLERANCE,
        }
    }
}
