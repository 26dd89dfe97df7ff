//! Provider fallback chain with degradation tracking.
//!
//! Providers are tried in priority order; the first available one that
//! succeeds wins. Every fallback past the primary is recorded so callers
//! can surface reduced-fidelity results to users.

use std::sync::Mutex;

use serde::Serialize;
use tracing::warn;
use verbatim_core::errors::{EmbeddingError, VerbatimResult};
use verbatim_core::traits::IEmbeddingProvider;

/// One recorded fallback: which provider failed, why, and what took over.
#[derive(Debug, Clone, Serialize)]
pub struct DegradationEvent {
    pub failed_provider: String,
    pub reason: String,
    pub fallback_used: String,
}

/// Ordered embedding providers with first-available-wins semantics.
///
/// Event recording uses interior mutability so the chain can sit behind the
/// `&self` methods of `IEmbeddingProvider`.
pub struct FallbackChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl FallbackChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Append a provider at the lowest priority so far.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Drain recorded degradation events.
    pub fn take_events(&self) -> Vec<DegradationEvent> {
        std::mem::take(&mut *self.events.lock().expect("events lock"))
    }

    pub fn embed(&self, text: &str) -> VerbatimResult<Vec<f32>> {
        self.try_chain(|p| p.embed(text))
    }

    pub fn embed_batch(&self, texts: &[String]) -> VerbatimResult<Vec<Vec<f32>>> {
        self.try_chain(|p| p.embed_batch(texts))
    }

    fn try_chain<T>(
        &self,
        op: impl Fn(&dyn IEmbeddingProvider) -> VerbatimResult<T>,
    ) -> VerbatimResult<T> {
        let mut tried = Vec::new();
        let mut last_failure: Option<(String, String)> = None;

        for provider in &self.providers {
            tried.push(provider.name().to_string());
            if !provider.is_available() {
                last_failure = Some((provider.name().to_string(), "unavailable".to_string()));
                continue;
            }
            match op(provider.as_ref()) {
                Ok(result) => {
                    if let Some((failed, reason)) = last_failure {
                        warn!(
                            failed = %failed,
                            fallback = provider.name(),
                            "embedding provider degraded"
                        );
                        self.events.lock().expect("events lock").push(DegradationEvent {
                            failed_provider: failed,
                            reason,
                            fallback_used: provider.name().to_string(),
                        });
                    }
                    return Ok(result);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next"
                    );
                    last_failure = Some((provider.name().to_string(), e.to_string()));
                }
            }
        }

        Err(EmbeddingError::NoProviderAvailable { tried: tried.join(", ") }.into())
    }
}

impl Default for FallbackChain {
    fn default() -> Self {
        Self::new()
    }
}
