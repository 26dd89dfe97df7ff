//! Per-subsystem error enums plus the workspace umbrella error.

mod clustering_error;
mod embedding_error;
mod extraction_error;

pub use clustering_error::ClusteringError;
pub use embedding_error::EmbeddingError;
pub use extraction_error::ExtractionError;

/// Umbrella error for the Verbatim workspace.
#[derive(Debug, thiserror::Error)]
pub enum VerbatimError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Clustering(#[from] ClusteringError),
}

pub type VerbatimResult<T> = Result<T, VerbatimError>;
