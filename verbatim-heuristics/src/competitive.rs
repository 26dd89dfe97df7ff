//! Competitive mention analysis.
//!
//! Comparison phrasings ("better than X", "found X for less") capture the
//! competitor name; nearby polarity words decide how the competitor is
//! seen, and co-occurring vocabulary classifies the comparison.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use verbatim_core::traits::Polarity;

static COMPARISON_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"better than (\w+)",
        r"compared to (\w+)",
        r"unlike (\w+)",
        r"similar to (\w+)",
        r"(\w+) is cheaper",
        r"(\w+) costs less",
        r"found (\w+) for less",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

const POSITIVE_CONTEXT: &[&str] = &["better", "superior", "prefer", "love", "excellent"];
const NEGATIVE_CONTEXT: &[&str] = &[
    "worse",
    "inferior",
    "hate",
    "terrible",
    "awful",
    "cheaper",
    "less expensive",
];

const PRICING_WORDS: &[&str] = &["price", "cost", "expensive", "cheap"];
const QUALITY_WORDS: &[&str] = &["quality", "better", "worse"];
const SERVICE_WORDS: &[&str] = &["service", "support"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonType {
    Pricing,
    Quality,
    Service,
}

/// Everything learned about one competitor name.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitorMention {
    pub mentions: usize,
    /// The full responses the name appeared in.
    pub contexts: Vec<String>,
    /// Sentiment toward the competitor from the latest mention context.
    pub sentiment: Polarity,
    pub comparison_types: Vec<ComparisonType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompetitiveReport {
    /// Keyed by lowercased competitor name; BTreeMap keeps output stable.
    pub competitors: BTreeMap<String, CompetitorMention>,
    pub total_mentions: usize,
    pub most_mentioned: Option<String>,
    pub recommendations: Vec<String>,
}

/// Scan responses for competitor comparisons. Empty input or no matches
/// yields an empty report with a monitoring recommendation.
pub fn analyze_competitive(texts: &[String]) -> CompetitiveReport {
    let mut competitors: BTreeMap<String, CompetitorMention> = BTreeMap::new();

    for text in texts {
        let lower = text.to_lowercase();
        for pattern in COMPARISON_PATTERNS.iter() {
            for captures in pattern.captures_iter(&lower) {
                let Some(name) = captures.get(1) else {
                    continue;
                };
                let entry = competitors
                    .entry(name.as_str().to_string())
                    .or_insert_with(|| CompetitorMention {
                        mentions: 0,
                        contexts: Vec::new(),
                        sentiment: Polarity::Neutral,
                        comparison_types: Vec::new(),
                    });
                entry.mentions += 1;
                entry.contexts.push(text.clone());
                entry.sentiment = context_sentiment(&lower);
                if let Some(kind) = comparison_type(&lower) {
                    entry.comparison_types.push(kind);
                }
            }
        }
    }

    let total_mentions = competitors.values().map(|c| c.mentions).sum();
    let most_mentioned = competitors
        .iter()
        .max_by_key(|(_, c)| c.mentions)
        .map(|(name, _)| name.clone());
    let recommendations = recommend(&competitors);

    CompetitiveReport {
        competitors,
        total_mentions,
        most_mentioned,
        recommendations,
    }
}

fn context_sentiment(lower: &str) -> Polarity {
    let pos = POSITIVE_CONTEXT.iter().filter(|w| lower.contains(*w)).count();
    let neg = NEGATIVE_CONTEXT.iter().filter(|w| lower.contains(*w)).count();
    if pos > neg {
        Polarity::Positive
    } else if neg > pos {
        Polarity::Negative
    } else {
        Polarity::Neutral
    }
}

fn comparison_type(lower: &str) -> Option<ComparisonType> {
    if PRICING_WORDS.iter().any(|w| lower.contains(w)) {
        Some(ComparisonType::Pricing)
    } else if QUALITY_WORDS.iter().any(|w| lower.contains(w)) {
        Some(ComparisonType::Quality)
    } else if SERVICE_WORDS.iter().any(|w| lower.contains(w)) {
        Some(ComparisonType::Service)
    } else {
        None
    }
}

fn recommend(competitors: &BTreeMap<String, CompetitorMention>) -> Vec<String> {
    if competitors.is_empty() {
        return vec!["Monitor for competitive mentions in future surveys".to_string()];
    }

    let mut recommendations = Vec::new();
    let pricing = competitors
        .values()
        .filter(|c| c.comparison_types.contains(&ComparisonType::Pricing))
        .count();
    if pricing > 0 {
        recommendations
            .push("Consider pricing strategy review due to competitive price comparisons".to_string());
    }

    let negative = competitors
        .values()
        .filter(|c| c.sentiment == Polarity::Negative)
        .count();
    if negative * 2 > competitors.len() {
        recommendations
            .push("Customers view competitors unfavorably, leverage this in marketing".to_string());
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_mentions_yields_monitoring_recommendation() {
        let report = analyze_competitive(&strings(&["the product is fine"]));
        assert!(report.competitors.is_empty());
        assert_eq!(report.total_mentions, 0);
        assert!(report.recommendations[0].contains("Monitor"));
    }

    #[test]
    fn better_than_captures_competitor() {
        let report = analyze_competitive(&strings(&["your app is better than acme in every way"]));
        let acme = &report.competitors["acme"];
        assert_eq!(acme.mentions, 1);
        // "better" reads as positive toward the comparison context.
        assert_eq!(acme.sentiment, Polarity::Positive);
        assert_eq!(report.most_mentioned.as_deref(), Some("acme"));
    }

    #[test]
    fn cheaper_pattern_is_a_pricing_comparison() {
        let report = analyze_competitive(&strings(&["honestly globex is cheaper than you"]));
        let globex = &report.competitors["globex"];
        assert!(globex.comparison_types.contains(&ComparisonType::Pricing));
        assert_eq!(globex.sentiment, Polarity::Negative);
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("pricing strategy")));
    }

    #[test]
    fn mentions_accumulate_across_responses() {
        let report = analyze_competitive(&strings(&[
            "compared to initech your checkout is slower",
            "unlike initech you have no free returns",
        ]));
        assert_eq!(report.competitors["initech"].mentions, 2);
        assert_eq!(report.competitors["initech"].contexts.len(), 2);
        assert_eq!(report.total_mentions, 2);
    }

    #[test]
    fn capture_is_case_insensitive() {
        let report = analyze_competitive(&strings(&["Better than Acme for sure"]));
        assert!(report.competitors.contains_key("acme"));
    }

    #[test]
    fn service_comparison_classified() {
        let report = analyze_competitive(&strings(&[
            "compared to initech your support team actually answers",
        ]));
        assert!(report.competitors["initech"]
            .comparison_types
            .contains(&ComparisonType::Service));
    }

    #[test]
    fn empty_input_is_safe() {
        let report = analyze_competitive(&[]);
        assert!(report.competitors.is_empty());
        assert!(report.most_mentioned.is_none());
    }
}
