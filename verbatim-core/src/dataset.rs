//! Tabular dataset model: ordered named columns aligned by row index.
//!
//! Immutable input to extraction. Extraction derives profiles and responses
//! from it; the dataset itself is never mutated in place.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A single named column of optional cell values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<String>>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Iterate the non-null, trimmed cell values.
    pub fn non_null(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter_map(|v| v.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn non_null_count(&self) -> usize {
        self.non_null().count()
    }

    pub fn null_count(&self) -> usize {
        self.values.len() - self.non_null_count()
    }

    /// Number of distinct non-null trimmed values.
    pub fn distinct_count(&self) -> usize {
        self.non_null().collect::<HashSet<_>>().len()
    }
}

/// An ordered sequence of named columns, aligned by row index.
///
/// Columns of unequal length are padded conceptually: `cell` returns `None`
/// past the end of a short column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Self {
        let n_rows = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
        Self { columns, n_rows }
    }

    /// Build a dataset from row-major data, one cell per header per row.
    ///
    /// Short rows are padded with nulls; extra cells beyond the headers are
    /// dropped.
    pub fn from_rows(headers: &[&str], rows: &[Vec<Option<&str>>]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let values = rows
                    .iter()
                    .map(|row| row.get(i).cloned().flatten().map(str::to_string))
                    .collect();
                Column::new(*name, values)
            })
            .collect();
        Self::new(columns)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The trimmed cell at (column index, row index), if present and non-empty.
    pub fn cell(&self, column: usize, row: usize) -> Option<&str> {
        self.columns
            .get(column)?
            .values
            .get(row)?
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0 || self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_rows(
            &["Name", "Comments"],
            &[
                vec![Some("alice"), Some("great service")],
                vec![Some("bob"), None],
                vec![Some("carol"), Some("  great service  ")],
            ],
        )
    }

    #[test]
    fn from_rows_transposes() {
        let ds = sample();
        assert_eq!(ds.n_rows(), 3);
        assert_eq!(ds.n_columns(), 2);
        assert_eq!(ds.cell(1, 0), Some("great service"));
        assert_eq!(ds.cell(1, 1), None);
    }

    #[test]
    fn cell_trims_whitespace() {
        let ds = sample();
        assert_eq!(ds.cell(1, 2), Some("great service"));
    }

    #[test]
    fn distinct_count_ignores_trim_differences() {
        let ds = sample();
        let comments = ds.column("Comments").unwrap();
        assert_eq!(comments.non_null_count(), 2);
        assert_eq!(comments.distinct_count(), 1);
    }

    #[test]
    fn null_count_includes_empty_strings() {
        let col = Column::new("c", vec![Some("  ".to_string()), None, Some("x".to_string())]);
        assert_eq!(col.non_null_count(), 1);
        assert_eq!(col.null_count(), 2);
    }

    #[test]
    fn short_rows_pad_with_null() {
        let ds = Dataset::from_rows(&["a", "b"], &[vec![Some("1")]]);
        assert_eq!(ds.cell(0, 0), Some("1"));
        assert_eq!(ds.cell(1, 0), None);
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::new(vec![]);
        assert!(ds.is_empty());
        assert_eq!(ds.n_rows(), 0);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn rows_strategy() -> impl Strategy<Value = Vec<Vec<Option<String>>>> {
        proptest::collection::vec(
            proptest::collection::vec(proptest::option::of("[a-z ]{0,12}"), 0..5),
            0..20,
        )
    }

    proptest! {
        #[test]
        fn from_rows_shape_is_headers_by_rows(rows in rows_strategy()) {
            let headers = ["c0", "c1", "c2"];
            let borrowed: Vec<Vec<Option<&str>>> = rows
                .iter()
                .map(|r| r.iter().map(|c| c.as_deref()).collect())
                .collect();
            let ds = Dataset::from_rows(&headers, &borrowed);
            prop_assert_eq!(ds.n_columns(), 3);
            prop_assert_eq!(ds.n_rows(), rows.len());
            for col in ds.columns() {
                prop_assert_eq!(col.values.len(), rows.len());
            }
        }

        #[test]
        fn cell_never_returns_blank_text(rows in rows_strategy()) {
            let headers = ["c0", "c1", "c2"];
            let borrowed: Vec<Vec<Option<&str>>> = rows
                .iter()
                .map(|r| r.iter().map(|c| c.as_deref()).collect())
                .collect();
            let ds = Dataset::from_rows(&headers, &borrowed);
            for ci in 0..ds.n_columns() {
                for ri in 0..ds.n_rows() {
                    if let Some(cell) = ds.cell(ci, ri) {
                        prop_assert!(!cell.is_empty());
                        prop_assert_eq!(cell, cell.trim());
                    }
                }
            }
        }
    }
}
