//! EmbeddingEngine: fallback chain plus caching behind one provider
//! interface.

use tracing::{debug, info};
use verbatim_core::config::EmbeddingConfig;
use verbatim_core::errors::VerbatimResult;
use verbatim_core::traits::IEmbeddingProvider;

use crate::cache::{self, EmbeddingCache};
use crate::chain::{DegradationEvent, FallbackChain};
use crate::providers;

/// The main embedding entry point.
///
/// Wraps provider selection, fallback, and caching. Implements
/// `IEmbeddingProvider` so the clustering engine takes it anywhere a
/// provider is expected.
pub struct EmbeddingEngine {
    chain: FallbackChain,
    single_cache: EmbeddingCache<Vec<f32>>,
    batch_cache: EmbeddingCache<Vec<Vec<f32>>>,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Build the engine from configuration: configured primary provider
    /// first, TF-IDF as the last resort. When the primary already is the
    /// TF-IDF fallback the chain holds it once, not twice.
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut chain = FallbackChain::new();
        let primary = providers::create_provider(&config);
        let primary_is_last_resort = primary.name() == "tfidf";
        chain.push(primary);
        if !primary_is_last_resort {
            chain.push(Box::new(providers::TfIdfProvider::new(config.dimensions)));
        }

        let single_cache = EmbeddingCache::new(config.l1_cache_size);
        // Batch results are large; cap entries well below the single tier.
        let batch_cache = EmbeddingCache::new(config.l1_cache_size / 16 + 1);

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "embedding engine initialized"
        );

        Self {
            chain,
            single_cache,
            batch_cache,
            config,
        }
    }

    /// Drain degradation events accumulated since the last call.
    pub fn take_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.take_events()
    }

    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    /// Number of providers in the fallback chain.
    pub fn provider_count(&self) -> usize {
        self.chain.len()
    }
}

impl Default for EmbeddingEngine {
    fn default() -> Self {
        Self::new(EmbeddingConfig::default())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> VerbatimResult<Vec<f32>> {
        let key = cache::text_key(text);
        if let Some(hit) = self.single_cache.get(&key) {
            debug!(key = %key, "embedding cache hit");
            return Ok(hit);
        }
        let embedding = self.chain.embed(text)?;
        self.single_cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    fn embed_batch(&self, texts: &[String]) -> VerbatimResult<Vec<Vec<f32>>> {
        let key = cache::batch_key(texts);
        if let Some(hit) = self.batch_cache.get(&key) {
            debug!(key = %key, n = texts.len(), "batch embedding cache hit");
            return Ok(hit);
        }
        let embeddings = self.chain.embed_batch(texts)?;
        self.batch_cache.insert(key, embeddings.clone());
        Ok(embeddings)
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        "embedding-engine"
    }

    fn is_available(&self) -> bool {
        // TF-IDF at the end of the chain is always available.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            dimensions: 128,
            ..Default::default()
        })
    }

    #[test]
    fn engine_reports_configured_dimensions() {
        let engine = default_engine();
        assert_eq!(engine.dimensions(), 128);
        assert_eq!(engine.active_provider(), "tfidf");
    }

    #[test]
    fn tfidf_primary_is_not_duplicated_in_chain() {
        let engine = default_engine();
        assert_eq!(engine.provider_count(), 1);
    }

    #[test]
    fn embed_returns_configured_dims() {
        let engine = default_engine();
        let v = engine.embed("the app is slow").unwrap();
        assert_eq!(v.len(), 128);
    }

    #[test]
    fn repeated_embed_is_stable() {
        let engine = default_engine();
        let a = engine.embed("cached response").unwrap();
        let b = engine.embed("cached response").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_is_ordered_and_stable() {
        let engine = default_engine();
        let texts = vec![
            "support answered quickly".to_string(),
            "never got a reply".to_string(),
        ];
        let a = engine.embed_batch(&texts).unwrap();
        let b = engine.embed_batch(&texts).unwrap();
        assert_eq!(a.len(), 2);
        assert_eq!(a, b);
    }

    #[test]
    fn usable_as_trait_object() {
        let engine = default_engine();
        let provider: &dyn IEmbeddingProvider = &engine;
        assert!(provider.is_available());
        let vecs = provider
            .embed_batch(&["a response".to_string(), "another one".to_string()])
            .unwrap();
        assert!(vecs.iter().all(|v| v.len() == 128));
    }

    #[test]
    fn no_degradation_events_on_success() {
        let engine = default_engine();
        engine.embed("fine").unwrap();
        assert!(engine.take_degradation_events().is_empty());
    }
}
