//! Per-subsystem configuration with serde defaults.

mod clustering_config;
mod embedding_config;
mod extraction_config;

pub use clustering_config::ClusteringConfig;
pub use embedding_config::EmbeddingConfig;
pub use extraction_config::ExtractionConfig;

use serde::{Deserialize, Serialize};

/// Default values shared across config structs.
pub mod defaults {
    /// Embedding vector dimensionality (matches the all-MiniLM family).
    pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
    /// L1 embedding cache capacity, in entries.
    pub const DEFAULT_L1_CACHE_SIZE: u64 = 4096;
    /// Fixed seed for reproducible clustering within a configuration.
    pub const DEFAULT_RANDOM_SEED: u64 = 42;
    /// Upper bound of the silhouette K search.
    pub const DEFAULT_MAX_CLUSTERS: usize = 10;
    /// Minimum cluster size for density clustering.
    pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
    /// Target dimensionality of the pre-density reduction step.
    pub const DEFAULT_REDUCED_DIMENSIONS: usize = 5;
    /// K-means iteration cap.
    pub const DEFAULT_MAX_ITERATIONS: u64 = 100;
    /// K-means convergence tolerance.
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;
    /// Below this many platform-pass responses, escalate to aggressive.
    pub const DEFAULT_MIN_PLATFORM_RESULTS: usize = 10;
    /// Below this many aggressive-pass responses, escalate to generic.
    pub const DEFAULT_MIN_AGGRESSIVE_RESULTS: usize = 5;
    /// Column-name token Jaccard similarity above which columns are related.
    pub const DEFAULT_RELATEDNESS_THRESHOLD: f64 = 0.3;
}

/// Top-level configuration for an analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerbatimConfig {
    pub extraction: ExtractionConfig,
    pub embedding: EmbeddingConfig,
    pub clustering: ClusteringConfig,
}
