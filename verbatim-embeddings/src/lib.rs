//! # verbatim-embeddings
//!
//! Text embedding for response clustering: providers behind the
//! `IEmbeddingProvider` trait, a first-available-wins fallback chain with
//! degradation tracking, an L1 cache, and a registry for shared provider
//! instances.

pub mod cache;
pub mod chain;
pub mod engine;
pub mod providers;
pub mod registry;

pub use cache::EmbeddingCache;
pub use chain::{DegradationEvent, FallbackChain};
pub use engine::EmbeddingEngine;
pub use providers::TfIdfProvider;
pub use registry::ModelRegistry;
