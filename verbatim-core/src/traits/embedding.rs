use crate::errors::VerbatimResult;

/// Embedding generation provider.
///
/// Must be deterministic for identical input and fixed configuration; the
/// clustering engine relies on this for within-run reproducibility.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> VerbatimResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input, in order.
    fn embed_batch(&self, texts: &[String]) -> VerbatimResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
