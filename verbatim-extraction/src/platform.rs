//! Survey platform fingerprinting.
//!
//! Detection is advisory only: it labels the extraction report but never
//! gates which passes run.

use serde::{Deserialize, Serialize};
use verbatim_core::dataset::Dataset;

/// Originating survey platform family, inferred from metadata column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    SurveyMonkey,
    Typeform,
    GoogleForms,
    Qualtrics,
    Unknown,
}

const FINGERPRINTS: &[(Platform, &[&str])] = &[
    (
        Platform::SurveyMonkey,
        &["respondent", "collector", "start date", "end date"],
    ),
    (
        Platform::Typeform,
        &["submit date", "network id", "response id"],
    ),
    (Platform::GoogleForms, &["timestamp", "email address"]),
    (
        Platform::Qualtrics,
        &["response id", "response type", "ip address"],
    ),
];

/// Minimum fingerprint hits to attribute a platform.
const MIN_MATCHES: usize = 2;

pub fn detect(dataset: &Dataset) -> Platform {
    let lower: Vec<String> = dataset
        .columns()
        .iter()
        .map(|c| c.name.to_lowercase())
        .collect();

    for (platform, indicators) in FINGERPRINTS {
        let matches = indicators
            .iter()
            .filter(|ind| lower.iter().any(|col| col.contains(*ind)))
            .count();
        if matches >= MIN_MATCHES {
            return *platform;
        }
    }
    Platform::Unknown
}
