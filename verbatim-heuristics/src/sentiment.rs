//! Sentiment scorers behind the `ISentimentScorer` capability.
//!
//! `LexiconScorer` needs nothing and always works. `PrototypeScorer`
//! compares corpus embeddings against seed polarity phrases and is only as
//! available as its embedding provider. `select_scorer` picks the best
//! available one at construction; both score with the same signature.

use std::sync::Arc;

use tracing::debug;
use verbatim_core::errors::VerbatimResult;
use verbatim_core::traits::{IEmbeddingProvider, ISentimentScorer, Polarity, SentimentResult};

use crate::aspects::{NEGATIVE_WORDS, POSITIVE_WORDS};

const DECIDED_CONFIDENCE: f32 = 0.7;
const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Keyword-count sentiment. Crude but dependency-free.
pub struct LexiconScorer;

impl ISentimentScorer for LexiconScorer {
    fn score(&self, texts: &[String]) -> VerbatimResult<SentimentResult> {
        let mut pos = 0usize;
        let mut neg = 0usize;
        for text in texts {
            let lower = text.to_lowercase();
            pos += POSITIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
            neg += NEGATIVE_WORDS.iter().filter(|w| lower.contains(*w)).count();
        }
        Ok(decide(pos as f32, neg as f32))
    }

    fn name(&self) -> &str {
        "lexicon"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Seed phrases anchoring each polarity in embedding space.
const POSITIVE_SEEDS: &[&str] = &[
    "this is excellent, i am very satisfied and happy with it",
    "great experience, i love it and would recommend it",
];
const NEGATIVE_SEEDS: &[&str] = &[
    "this is terrible, i am very disappointed and frustrated",
    "awful experience, i hate it and want my money back",
];

/// Embedding-similarity sentiment: the corpus centroid is compared against
/// positive and negative prototype phrases.
pub struct PrototypeScorer {
    provider: Arc<dyn IEmbeddingProvider>,
}

impl PrototypeScorer {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        Self { provider }
    }

    fn centroid(vectors: &[Vec<f32>]) -> Vec<f32> {
        let dims = vectors.first().map(Vec::len).unwrap_or(0);
        let mut centroid = vec![0.0f32; dims];
        for v in vectors {
            for (c, &x) in centroid.iter_mut().zip(v) {
                *c += x;
            }
        }
        for c in &mut centroid {
            *c /= vectors.len().max(1) as f32;
        }
        centroid
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na > f32::EPSILON && nb > f32::EPSILON {
        dot / (na * nb)
    } else {
        0.0
    }
}

impl ISentimentScorer for PrototypeScorer {
    fn score(&self, texts: &[String]) -> VerbatimResult<SentimentResult> {
        if texts.is_empty() {
            return Ok(SentimentResult {
                polarity: Polarity::Neutral,
                confidence: NEUTRAL_CONFIDENCE,
            });
        }

        let corpus = Self::centroid(&self.provider.embed_batch(texts)?);
        let seeds = |phrases: &[&str]| -> VerbatimResult<Vec<f32>> {
            let owned: Vec<String> = phrases.iter().map(|s| s.to_string()).collect();
            Ok(Self::centroid(&self.provider.embed_batch(&owned)?))
        };
        let pos = cosine(&corpus, &seeds(POSITIVE_SEEDS)?);
        let neg = cosine(&corpus, &seeds(NEGATIVE_SEEDS)?);
        debug!(pos, neg, "prototype similarity");
        Ok(decide(pos, neg))
    }

    fn name(&self) -> &str {
        "prototype"
    }

    fn is_available(&self) -> bool {
        self.provider.is_available()
    }
}

fn decide(pos: f32, neg: f32) -> SentimentResult {
    if pos > neg {
        SentimentResult {
            polarity: Polarity::Positive,
            confidence: DECIDED_CONFIDENCE,
        }
    } else if neg > pos {
        SentimentResult {
            polarity: Polarity::Negative,
            confidence: DECIDED_CONFIDENCE,
        }
    } else {
        SentimentResult {
            polarity: Polarity::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
        }
    }
}

/// Pick the richest available scorer at construction time.
pub fn select_scorer(provider: Option<Arc<dyn IEmbeddingProvider>>) -> Box<dyn ISentimentScorer> {
    match provider {
        Some(p) if p.is_available() => Box::new(PrototypeScorer::new(p)),
        _ => Box::new(LexiconScorer),
    }
}
