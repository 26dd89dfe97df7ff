//! Shared provider registry.
//!
//! One process analyzing many surveys should load each embedding model
//! once. The registry owns lazily-initialized providers by name and hands
//! out shared handles; consumers receive their provider through
//! construction instead of reaching for global state.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::debug;
use verbatim_core::traits::IEmbeddingProvider;

/// Named, lazily-initialized embedding providers with shared ownership.
pub struct ModelRegistry {
    models: Mutex<HashMap<String, Arc<dyn IEmbeddingProvider>>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self {
            models: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch the provider registered under `name`, initializing it with
    /// `init` on first use. Subsequent calls return the same instance.
    pub fn get_or_load(
        &self,
        name: &str,
        init: impl FnOnce() -> Arc<dyn IEmbeddingProvider>,
    ) -> Arc<dyn IEmbeddingProvider> {
        let mut models = self.models.lock().expect("registry lock");
        if let Some(existing) = models.get(name) {
            return Arc::clone(existing);
        }
        debug!(model = name, "loading embedding provider");
        let provider = init();
        models.insert(name.to_string(), Arc::clone(&provider));
        provider
    }

    /// Drop the provider registered under `name`, if any.
    pub fn evict(&self, name: &str) -> bool {
        self.models.lock().expect("registry lock").remove(name).is_some()
    }

    pub fn loaded_count(&self) -> usize {
        self.models.lock().expect("registry lock").len()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
