//! Corpus-aware TF-IDF embedding provider.
//!
//! Hashes unigram and bigram terms into fixed-dimension buckets and weights
//! them by TF-IDF. Batch embedding fits IDF over the batch itself, so terms
//! common across the corpus (question echoes, platform boilerplate) are
//! downweighted relative to terms that distinguish responses. Always
//! available; no model files, no network.

use std::collections::HashMap;

use verbatim_core::errors::VerbatimResult;
use verbatim_core::traits::IEmbeddingProvider;

/// TF-IDF embedding provider with hashed term buckets.
///
/// Deterministic for identical input. Single-text embedding uses a
/// length-based IDF surrogate; batch embedding fits real document
/// frequencies over the batch.
pub struct TfIdfProvider {
    dimensions: usize,
}

impl TfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// Lowercase alphanumeric tokens, two or more characters.
    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '_')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    /// Unigrams plus adjacent bigrams. Bigrams let "not good" and "good"
    /// land in different buckets.
    fn terms(text: &str) -> Vec<String> {
        let tokens = Self::tokenize(text);
        let mut terms = tokens.clone();
        for pair in tokens.windows(2) {
            terms.push(format!("{} {}", pair[0], pair[1]));
        }
        terms
    }

    /// Stable bucket index from the blake3 hash of the term.
    fn bucket(term: &str, dims: usize) -> usize {
        let hash = blake3::hash(term.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&hash.as_bytes()[..8]);
        (u64::from_le_bytes(prefix) as usize) % dims
    }

    /// Build one document vector; `idf` of `None` falls back to a term-length
    /// surrogate (longer terms are rarer in natural language).
    fn vector(&self, text: &str, idf: Option<&HashMap<String, f32>>) -> Vec<f32> {
        let terms = Self::terms(text);
        if terms.is_empty() {
            return vec![0.0; self.dimensions];
        }

        let mut tf: HashMap<&str, f32> = HashMap::new();
        for term in &terms {
            *tf.entry(term.as_str()).or_default() += 1.0;
        }

        let total = terms.len() as f32;
        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            let freq = count / total;
            let weight = match idf {
                Some(idf) => idf.get(*term).copied().unwrap_or(1.0),
                None => 1.0 + (term.len() as f32).ln(),
            };
            vec[Self::bucket(term, self.dimensions)] += freq * weight;
        }

        l2_normalize(&mut vec);
        vec
    }

    /// Smoothed IDF over the batch: `ln(1 + n_docs / (1 + df))`.
    fn fit_idf(texts: &[String]) -> HashMap<String, f32> {
        let n_docs = texts.len() as f32;
        let mut df: HashMap<String, f32> = HashMap::new();
        for text in texts {
            let mut terms = Self::terms(text);
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *df.entry(term).or_default() += 1.0;
            }
        }
        df.into_iter()
            .map(|(term, df)| (term, (1.0 + n_docs / (1.0 + df)).ln()))
            .collect()
    }
}

fn l2_normalize(vec: &mut [f32]) {
    let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for v in vec {
            *v /= norm;
        }
    }
}

impl IEmbeddingProvider for TfIdfProvider {
    fn embed(&self, text: &str) -> VerbatimResult<Vec<f32>> {
        Ok(self.vector(text, None))
    }

    fn embed_batch(&self, texts: &[String]) -> VerbatimResult<Vec<Vec<f32>>> {
        let idf = Self::fit_idf(texts);
        Ok(texts.iter().map(|t| self.vector(t, Some(&idf))).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
