//! In-memory embedding cache keyed by blake3 content hashes.

use std::time::Duration;

use moka::sync::Cache;

/// Content hash for a single text.
pub fn text_key(text: &str) -> String {
    blake3::hash(text.as_bytes()).to_hex().to_string()
}

/// Content hash for an ordered batch. Batch embeddings are corpus-fit, so
/// the same text in a different batch is a different cache entity. Lengths
/// are mixed in so concatenation boundaries cannot collide.
pub fn batch_key(texts: &[String]) -> String {
    let mut hasher = blake3::Hasher::new();
    for text in texts {
        hasher.update(&(text.len() as u64).to_le_bytes());
        hasher.update(text.as_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// L1 cache tier, generic over the cached value (single vectors or whole
/// batch results).
///
/// TinyLFU admission with an idle TTL so a long-lived process sheds
/// embeddings for surveys it finished analyzing.
pub struct EmbeddingCache<V> {
    cache: Cache<String, V>,
}

impl<V: Clone + Send + Sync + 'static> EmbeddingCache<V> {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<V> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, value: V) {
        self.cache.insert(key, value);
    }

    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
