//! Capability traits at the subsystem seams.

mod embedding;
mod sentiment;

pub use embedding::IEmbeddingProvider;
pub use sentiment::{ISentimentScorer, Polarity, SentimentResult};
