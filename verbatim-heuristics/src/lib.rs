//! # verbatim-heuristics
//!
//! Post-clustering analysis heuristics: response quality scoring, anomaly
//! detection, aspect-level sentiment, and competitive mention analysis.
//! Every function is pure and stateless; empty input produces a neutral
//! report, never a panic.

pub mod anomaly;
pub mod aspects;
pub mod competitive;
pub mod quality;
pub mod sentiment;

pub use anomaly::{detect_anomalies, Anomaly, AnomalyReport, AnomalyType};
pub use aspects::{analyze_aspects, AspectReport, AspectSentiment};
pub use competitive::{analyze_competitive, CompetitiveReport, CompetitorMention, ComparisonType};
pub use quality::{score_quality, QualityDistribution, QualityReport, ScoredResponse};
pub use sentiment::{select_scorer, LexiconScorer, PrototypeScorer};
