//! # verbatim-core
//!
//! Foundation crate for the Verbatim survey-analysis system.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dataset;
pub mod errors;
pub mod response;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VerbatimConfig;
pub use dataset::{Column, Dataset};
pub use errors::{VerbatimError, VerbatimResult};
pub use response::{ExtractedResponse, ExtractionMethod};
