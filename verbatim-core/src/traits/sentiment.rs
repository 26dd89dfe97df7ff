use serde::{Deserialize, Serialize};

use crate::errors::VerbatimResult;

/// Sentiment polarity of a set of texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

/// Result of scoring sentiment over a text set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SentimentResult {
    pub polarity: Polarity,
    pub confidence: f32,
}

/// Sentiment scoring capability.
///
/// Two variants exist (model-backed and keyword-heuristic) with identical
/// call signatures; callers select one at construction time based on what
/// is available.
pub trait ISentimentScorer: Send + Sync {
    /// Score the dominant sentiment across `texts`.
    fn score(&self, texts: &[String]) -> VerbatimResult<SentimentResult>;

    /// Human-readable scorer name.
    fn name(&self) -> &str;

    /// Whether this scorer can run in the current environment.
    fn is_available(&self) -> bool;
}
