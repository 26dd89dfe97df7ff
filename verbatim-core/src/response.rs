//! Extracted response with structured provenance.
//!
//! The `text` field stays clean of question prefixes so the embedding model
//! sees only semantic content; which columns a response came from is carried
//! as metadata instead.

use serde::{Deserialize, Serialize};

/// Which extraction mechanism produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Value from a column whose name indicates an open-ended question.
    OpenEnded,
    /// Value from an "Other (please specify)" style column.
    OtherSpecify,
    /// Row-wise combination across a group of related columns.
    CombinedGroup,
    /// Single meaningful cell from a non-metadata column.
    ColumnScan,
    /// Row-wise combination across a related-column group (aggressive pass).
    Contextual,
    /// Row-wise combination across all non-metadata columns.
    MultiPart,
    /// Cell from the top-scoring candidate column.
    BestColumn,
    /// Pipe-joined per-row values across all candidate columns.
    CombinedColumns,
}

/// A single free-text survey answer, post-extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedResponse {
    pub text: String,
    /// Columns the text was sourced from, in dataset order.
    pub source_columns: Vec<String>,
    pub method: ExtractionMethod,
}

impl ExtractedResponse {
    pub fn new(
        text: impl Into<String>,
        source_columns: Vec<String>,
        method: ExtractionMethod,
    ) -> Self {
        Self {
            text: text.into(),
            source_columns,
            method,
        }
    }
}
