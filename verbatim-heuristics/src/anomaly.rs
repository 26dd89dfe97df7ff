//! Anomalous response detection.
//!
//! With embeddings: Euclidean distance from the corpus centroid, flagging
//! everything past the 95th percentile. Without embeddings: length
//! deviation beyond two standard deviations, plus surface checks for
//! shouting and repetition.

use serde::Serialize;
use tracing::debug;

const SHORT_LEN: usize = 10;
const LONG_LEN: usize = 500;
const PERCENTILE: f64 = 0.95;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    TooShort,
    TooLong,
    AllCaps,
    Repetitive,
    SemanticOutlier,
    LengthOutlier,
}

#[derive(Debug, Clone, Serialize)]
pub struct Anomaly {
    /// Index into the input slice.
    pub index: usize,
    pub text: String,
    /// Distance from the centroid (embedding path) or from the mean length
    /// (fallback path).
    pub distance: f64,
    pub kind: AnomalyType,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyReport {
    pub anomalies: Vec<Anomaly>,
    /// The cutoff that flagged them.
    pub threshold: f64,
    /// What a typical response looks like.
    pub normal_pattern: String,
}

/// Detect unusual responses.
///
/// `embeddings`, when given, must be parallel to `texts`; ragged or
/// mismatched input silently falls back to the length heuristic.
pub fn detect_anomalies(texts: &[String], embeddings: Option<&[Vec<f32>]>) -> AnomalyReport {
    if texts.is_empty() {
        return AnomalyReport {
            anomalies: Vec::new(),
            threshold: 0.0,
            normal_pattern: "no responses".to_string(),
        };
    }

    match embeddings {
        Some(vectors) if vectors.len() == texts.len() && !vectors.is_empty() => {
            semantic_detection(texts, vectors)
        }
        _ => length_detection(texts),
    }
}

fn semantic_detection(texts: &[String], vectors: &[Vec<f32>]) -> AnomalyReport {
    let dims = vectors[0].len();
    let mut centroid = vec![0.0f64; dims];
    for v in vectors {
        for (c, &x) in centroid.iter_mut().zip(v) {
            *c += x as f64;
        }
    }
    for c in &mut centroid {
        *c /= vectors.len() as f64;
    }

    let distances: Vec<f64> = vectors
        .iter()
        .map(|v| {
            v.iter()
                .zip(&centroid)
                .map(|(&x, &c)| (x as f64 - c).powi(2))
                .sum::<f64>()
                .sqrt()
        })
        .collect();

    let threshold = percentile(&distances, PERCENTILE);
    debug!(threshold, "semantic anomaly threshold");

    let anomalies = texts
        .iter()
        .enumerate()
        .zip(&distances)
        .filter(|(_, &d)| d > threshold)
        .map(|((index, text), &distance)| Anomaly {
            index,
            text: text.clone(),
            distance,
            kind: classify(text).unwrap_or(AnomalyType::SemanticOutlier),
        })
        .collect();

    let normal: Vec<&String> = texts
        .iter()
        .zip(&distances)
        .filter(|(_, &d)| d <= threshold)
        .map(|(t, _)| t)
        .collect();

    AnomalyReport {
        anomalies,
        threshold,
        normal_pattern: describe_normal(&normal),
    }
}

fn length_detection(texts: &[String]) -> AnomalyReport {
    let lengths: Vec<f64> = texts.iter().map(|t| t.len() as f64).collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let threshold = 2.0 * variance.sqrt();

    let mut anomalies = Vec::new();
    for (index, text) in texts.iter().enumerate() {
        let deviation = (text.len() as f64 - mean).abs();
        let kind = if deviation > threshold && threshold > 0.0 {
            Some(classify(text).unwrap_or(AnomalyType::LengthOutlier))
        } else {
            // Surface checks still apply to in-range lengths.
            classify(text).filter(|k| matches!(k, AnomalyType::AllCaps | AnomalyType::Repetitive))
        };
        if let Some(kind) = kind {
            anomalies.push(Anomaly {
                index,
                text: text.clone(),
                distance: deviation,
                kind,
            });
        }
    }

    let all: Vec<&String> = texts.iter().collect();
    AnomalyReport {
        anomalies,
        threshold,
        normal_pattern: describe_normal(&all),
    }
}

/// Surface-level classification; `None` means nothing odd about the text
/// itself.
fn classify(text: &str) -> Option<AnomalyType> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let distinct: std::collections::HashSet<&str> = tokens.iter().copied().collect();

    if text.len() < SHORT_LEN {
        Some(AnomalyType::TooShort)
    } else if text.len() > LONG_LEN {
        Some(AnomalyType::TooLong)
    } else if !text.is_empty()
        && text.chars().any(|c| c.is_alphabetic())
        && text == text.to_uppercase()
    {
        Some(AnomalyType::AllCaps)
    } else if tokens.len() > 2 && distinct.len() <= 2 {
        Some(AnomalyType::Repetitive)
    } else {
        None
    }
}

/// Linearly interpolated percentile over sorted values.
fn percentile(values: &[f64], p: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = p * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let weight = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * weight
}

fn describe_normal(texts: &[&String]) -> String {
    if texts.is_empty() {
        return "no responses within threshold".to_string();
    }
    let avg_chars = texts.iter().map(|t| t.len()).sum::<usize>() as f64 / texts.len() as f64;
    let avg_words = texts
        .iter()
        .map(|t| t.split_whitespace().count())
        .sum::<usize>() as f64
        / texts.len() as f64;
    format!("Normal responses average {avg_chars:.1} characters and {avg_words:.1} words")
}
