//! Aspect-level sentiment tagging.
//!
//! Fixed category keyword map; a response mentions an aspect when any of
//! its keywords appears as a case-insensitive substring. Per-aspect
//! polarity comes from counting positive versus negative keyword hits in
//! the mentioning responses.

use std::collections::BTreeMap;

use serde::Serialize;
use verbatim_core::traits::{Polarity, SentimentResult};

pub const ASPECT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "customer_service",
        &["service", "support", "staff", "help", "team", "agent", "representative"],
    ),
    (
        "product_quality",
        &["quality", "product", "material", "construction", "build", "durability"],
    ),
    (
        "pricing",
        &["price", "cost", "expensive", "cheap", "value", "money", "pricing"],
    ),
    (
        "website_ux",
        &["website", "interface", "navigation", "site", "page", "design", "layout"],
    ),
    (
        "shipping",
        &["shipping", "delivery", "packaging", "transit", "arrived"],
    ),
    (
        "checkout",
        &["checkout", "payment", "purchase", "order", "cart", "process"],
    ),
    (
        "returns",
        &["return", "refund", "exchange", "policy", "replacement"],
    ),
];

pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "amazing", "satisfied", "happy", "best",
];
pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "disappointed", "poor", "worst", "slow",
];

const DECIDED_CONFIDENCE: f32 = 0.7;
const NEUTRAL_CONFIDENCE: f32 = 0.5;

/// Sentiment for one aspect across the responses that mention it.
#[derive(Debug, Clone, Serialize)]
pub struct AspectSentiment {
    pub polarity: Polarity,
    pub confidence: f32,
    pub mentions: usize,
    /// Up to three mentioning responses, in input order.
    pub sample_texts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AspectReport {
    /// Only aspects with at least one mention appear.
    pub aspects: BTreeMap<String, AspectSentiment>,
    pub overall: SentimentResult,
    pub insights: Vec<String>,
}

/// Tag and score every aspect. Empty input yields a neutral report.
pub fn analyze_aspects(texts: &[String]) -> AspectReport {
    let lowered: Vec<String> = texts.iter().map(|t| t.to_lowercase()).collect();

    let mut aspects = BTreeMap::new();
    for &(aspect, keywords) in ASPECT_CATEGORIES {
        let mentioning: Vec<usize> = lowered
            .iter()
            .enumerate()
            .filter(|(_, t)| keywords.iter().any(|k| t.contains(k)))
            .map(|(i, _)| i)
            .collect();
        if mentioning.is_empty() {
            continue;
        }

        let pos = mentioning
            .iter()
            .filter(|&&i| POSITIVE_WORDS.iter().any(|w| lowered[i].contains(w)))
            .count();
        let neg = mentioning
            .iter()
            .filter(|&&i| NEGATIVE_WORDS.iter().any(|w| lowered[i].contains(w)))
            .count();
        let (polarity, confidence) = decide(pos, neg);

        aspects.insert(
            aspect.to_string(),
            AspectSentiment {
                polarity,
                confidence,
                mentions: mentioning.len(),
                sample_texts: mentioning
                    .iter()
                    .take(3)
                    .map(|&i| texts[i].clone())
                    .collect(),
            },
        );
    }

    let overall_pos = lowered
        .iter()
        .filter(|t| POSITIVE_WORDS.iter().any(|w| t.contains(w)))
        .count();
    let overall_neg = lowered
        .iter()
        .filter(|t| NEGATIVE_WORDS.iter().any(|w| t.contains(w)))
        .count();
    let (polarity, confidence) = decide(overall_pos, overall_neg);

    let insights = generate_insights(&aspects);
    AspectReport {
        aspects,
        overall: SentimentResult {
            polarity,
            confidence,
        },
        insights,
    }
}

fn decide(pos: usize, neg: usize) -> (Polarity, f32) {
    if pos > neg {
        (Polarity::Positive, DECIDED_CONFIDENCE)
    } else if neg > pos {
        (Polarity::Negative, DECIDED_CONFIDENCE)
    } else {
        (Polarity::Neutral, NEUTRAL_CONFIDENCE)
    }
}

fn generate_insights(aspects: &BTreeMap<String, AspectSentiment>) -> Vec<String> {
    let mut insights = Vec::new();
    for (aspect, sentiment) in aspects {
        match sentiment.polarity {
            Polarity::Negative => insights.push(format!(
                "{aspect} draws negative feedback across {} mention(s)",
                sentiment.mentions
            )),
            Polarity::Positive if sentiment.mentions >= 3 => insights.push(format!(
                "{aspect} is a consistent strength ({} mentions)",
                sentiment.mentions
            )),
            _ => {}
        }
    }
    if let Some((most, s)) = aspects.iter().max_by_key(|(_, s)| s.mentions) {
        insights.push(format!(
            "{most} is the most discussed aspect ({} mentions)",
            s.mentions
        ));
    }
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_input_is_neutral() {
        let report = analyze_aspects(&[]);
        assert!(report.aspects.is_empty());
        assert_eq!(report.overall.polarity, Polarity::Neutral);
        assert_eq!(report.overall.confidence, 0.5);
    }

    #[test]
    fn shipping_complaints_tagged_negative() {
        let report = analyze_aspects(&strings(&[
            "shipping was terrible and slow",
            "delivery took forever, awful experience",
            "the checkout was fine",
        ]));
        let shipping = &report.aspects["shipping"];
        assert_eq!(shipping.polarity, Polarity::Negative);
        assert_eq!(shipping.confidence, 0.7);
        assert_eq!(shipping.mentions, 2);
    }

    #[test]
    fn unmentioned_aspects_are_absent() {
        let report = analyze_aspects(&strings(&["the website layout is great"]));
        assert!(report.aspects.contains_key("website_ux"));
        assert!(!report.aspects.contains_key("returns"));
    }

    #[test]
    fn mixed_signals_stay_neutral() {
        let report = analyze_aspects(&strings(&[
            "support was great",
            "support was terrible",
        ]));
        let cs = &report.aspects["customer_service"];
        assert_eq!(cs.polarity, Polarity::Neutral);
        assert_eq!(cs.confidence, 0.5);
    }

    #[test]
    fn overall_follows_majority() {
        let report = analyze_aspects(&strings(&[
            "great product",
            "love the quality",
            "bad delivery",
        ]));
        assert_eq!(report.overall.polarity, Polarity::Positive);
    }

    #[test]
    fn samples_cap_at_three() {
        let report = analyze_aspects(&strings(&[
            "price is fair",
            "price went up",
            "pricing is confusing",
            "cost too much money",
        ]));
        assert_eq!(report.aspects["pricing"].mentions, 4);
        assert_eq!(report.aspects["pricing"].sample_texts.len(), 3);
    }

    #[test]
    fn negative_aspects_produce_insights() {
        let report = analyze_aspects(&strings(&["shipping was awful and slow"]));
        assert!(report
            .insights
            .iter()
            .any(|i| i.contains("shipping") && i.contains("negative")));
    }
}
