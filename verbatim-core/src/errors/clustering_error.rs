use super::EmbeddingError;

/// Clustering subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusteringError {
    #[error("insufficient responses: got {count}, need at least {required}")]
    InsufficientResponses { count: usize, required: usize },

    #[error("density clustering labeled all {total} points as noise ({noise} noise labels)")]
    Unclusterable { total: usize, noise: usize },

    #[error("cluster fit failed: {reason}")]
    FitFailed { reason: String },

    #[error("dimensionality reduction failed: {reason}")]
    ReductionFailed { reason: String },

    /// Embedding failures propagate hard; there is no safe numeric
    /// fallback for missing vectors.
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}
