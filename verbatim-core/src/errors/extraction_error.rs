/// Response extraction errors.
///
/// Extraction shortfalls are not errors; they escalate internally and are
/// surfaced through the extraction report. Only genuinely invalid requests
/// land here.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },
}
