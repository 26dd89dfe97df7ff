//! Embedding providers.

mod tfidf;

pub use tfidf::TfIdfProvider;

use tracing::warn;
use verbatim_core::config::EmbeddingConfig;
use verbatim_core::traits::IEmbeddingProvider;

/// Instantiate the provider named in the configuration.
///
/// Unknown names fall back to TF-IDF rather than failing startup; the
/// fallback chain keeps its own last-resort TF-IDF regardless.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "tfidf" => Box::new(TfIdfProvider::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using tfidf");
            Box::new(TfIdfProvider::new(config.dimensions))
        }
    }
}
