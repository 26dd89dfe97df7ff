//! # verbatim-extraction
//!
//! Adaptive response extraction from arbitrary tabular survey exports.
//! One configurable pipeline, three strictness-parameterized passes
//! (platform-aware → aggressive → generic column scoring), selected by an
//! escalation controller that reports which path produced the results.

pub mod columns;
pub mod engine;
pub mod pipeline;
pub mod platform;
pub mod policy;
pub mod profile;
pub mod report;

pub use engine::{extract_responses, ExtractionEngine};
pub use platform::Platform;
pub use policy::TextPolicy;
pub use profile::ColumnProfile;
pub use report::{ExtractionReport, StageCount, StrategyKind};
