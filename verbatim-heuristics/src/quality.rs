//! Response quality scoring.
//!
//! Additive heuristic per response, clamped to [0, 1]:
//! word count ≥ 5 adds 0.3 (≥ 2 adds 0.1), unique-word ratio above 0.7
//! adds 0.2, more than one sentence adds 0.2, terminal punctuation adds
//! 0.1, a discourse connective adds 0.2.

use std::collections::HashSet;

use serde::Serialize;

/// Connectives that signal an elaborated answer rather than a fragment.
const CONNECTIVES: &[&str] = &["because", "however", "although", "specifically", "especially"];

const SPAM_THRESHOLD: f64 = 0.3;
const LOW_QUALITY_THRESHOLD: f64 = 0.5;
const HIGH_QUALITY_THRESHOLD: f64 = 0.7;

/// One scored response, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResponse {
    pub text: String,
    pub word_count: usize,
    pub score: f64,
    pub is_spam: bool,
    pub is_low_quality: bool,
}

/// Share of responses per quality band. High is score > 0.7, low is
/// score < 0.4, medium the rest.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct QualityDistribution {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    /// Scores in input order so callers can join back by index.
    pub scored: Vec<ScoredResponse>,
    pub average: f64,
    pub high_quality_count: usize,
    pub low_quality_count: usize,
    pub spam_count: usize,
    pub distribution: QualityDistribution,
}

/// Score every response. Empty input yields a zeroed report.
pub fn score_quality(texts: &[String]) -> QualityReport {
    let scored: Vec<ScoredResponse> = texts
        .iter()
        .map(|text| {
            let score = score_text(text);
            ScoredResponse {
                text: text.clone(),
                word_count: text.split_whitespace().count(),
                score,
                is_spam: score < SPAM_THRESHOLD,
                is_low_quality: score < LOW_QUALITY_THRESHOLD,
            }
        })
        .collect();

    let n = scored.len();
    let average = if n == 0 {
        0.0
    } else {
        scored.iter().map(|s| s.score).sum::<f64>() / n as f64
    };

    let distribution = if n == 0 {
        QualityDistribution::default()
    } else {
        QualityDistribution {
            high: scored.iter().filter(|s| s.score > 0.7).count() as f64 / n as f64,
            medium: scored
                .iter()
                .filter(|s| (0.4..=0.7).contains(&s.score))
                .count() as f64
                / n as f64,
            low: scored.iter().filter(|s| s.score < 0.4).count() as f64 / n as f64,
        }
    };

    QualityReport {
        high_quality_count: scored
            .iter()
            .filter(|s| s.score > HIGH_QUALITY_THRESHOLD)
            .count(),
        low_quality_count: scored.iter().filter(|s| s.is_low_quality).count(),
        spam_count: scored.iter().filter(|s| s.is_spam).count(),
        average,
        distribution,
        scored,
    }
}

fn score_text(text: &str) -> f64 {
    let mut score: f64 = 0.0;
    let words: Vec<&str> = text.split_whitespace().collect();

    match words.len() {
        0..=1 => {}
        2..=4 => score += 0.1,
        _ => score += 0.3,
    }

    if !words.is_empty() {
        let unique: HashSet<&str> = words.iter().copied().collect();
        if unique.len() as f64 / words.len() as f64 > 0.7 {
            score += 0.2;
        }
    }

    if sentence_count(text) > 1 {
        score += 0.2;
    }
    if text.contains(['.', '!', '?']) {
        score += 0.1;
    }

    let lower = text.to_lowercase();
    if CONNECTIVES.iter().any(|c| lower.contains(c)) {
        score += 0.2;
    }

    score.min(1.0)
}

fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scores_stay_in_unit_interval(texts in proptest::collection::vec(".{0,80}", 0..25)) {
            let report = score_quality(&texts);
            prop_assert_eq!(report.scored.len(), texts.len());
            for s in &report.scored {
                prop_assert!((0.0..=1.0).contains(&s.score));
            }
            prop_assert!(report.average >= 0.0 && report.average <= 1.0);
        }

        #[test]
        fn spam_implies_low_quality(texts in proptest::collection::vec("[a-zA-Z .!?]{0,60}", 1..15)) {
            let report = score_quality(&texts);
            for s in &report.scored {
                if s.is_spam {
                    prop_assert!(s.is_low_quality);
                }
            }
        }
    }
}
