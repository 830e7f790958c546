//! Tabular data parsed from spreadsheet exports

use serde::{Deserialize, Serialize};

/// Parsed table; `rows[0]` is the header row by convention
///
/// Rows are not required to have as many cells as the header. Missing cells read
/// as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Header row, empty if the table has no rows
    pub fn headers(&self) -> &[String] {
        self.rows.first().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every row after the header
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.rows.get(1..).unwrap_or(&[])
    }

    /// Cell text, `""` when the row or column does not exist
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Total rows including the header
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows after the header
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Build a bounded preview for display
    pub fn preview(&self, max_columns: usize, max_rows: usize) -> TablePreview {
        let shown = self.headers().len().min(max_columns);

        let headers = (0..shown).map(|c| self.cell(0, c).to_string()).collect();
        let rows = self
            .data_rows()
            .iter()
            .take(max_rows)
            .map(|row| {
                (0..shown)
                    .map(|c| row.get(c).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();

        TablePreview {
            headers,
            rows,
            total_rows: self.data_row_count(),
        }
    }
}

/// Bounded view of a table plus the full data row count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total_rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[&[&str]]) -> Table {
        Table::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_missing_cells_read_empty() {
        let t = table(&[&["a", "b", "c"], &["1"]]);
        assert_eq!(t.cell(1, 0), "1");
        assert_eq!(t.cell(1, 2), "");
        assert_eq!(t.cell(7, 0), "");
    }

    #[test]
    fn test_preview_caps_columns_and_rows() {
        let mut rows: Vec<Vec<String>> =
            vec![(0..7).map(|c| format!("h{}", c)).collect()];
        for r in 0..12 {
            rows.push((0..7).map(|c| format!("r{}c{}", r, c)).collect());
        }
        let preview = Table::from_rows(rows).preview(5, 8);

        assert_eq!(preview.headers, vec!["h0", "h1", "h2", "h3", "h4"]);
        assert_eq!(preview.rows.len(), 8);
        assert!(preview.rows.iter().all(|r| r.len() == 5));
        assert_eq!(preview.rows[7][4], "r7c4");
        assert_eq!(preview.total_rows, 12);
    }

    #[test]
    fn test_preview_pads_short_rows() {
        let preview = table(&[&["a", "b"], &["1"]]).preview(5, 8);
        assert_eq!(preview.rows, vec![vec!["1".to_string(), String::new()]]);
        assert_eq!(preview.total_rows, 1);
    }

    #[test]
    fn test_preview_with_unbounded_limits() {
        let preview = table(&[&["a"], &["1"]]).preview(usize::MAX, usize::MAX);
        assert_eq!(preview.headers, vec!["a"]);
        assert_eq!(preview.rows, vec![vec!["1".to_string()]]);
    }

    #[test]
    fn test_empty_table() {
        let t = Table::default();
        assert!(t.headers().is_empty());
        assert!(t.data_rows().is_empty());
        assert_eq!(t.data_row_count(), 0);
        assert_eq!(t.preview(5, 8).total_rows, 0);
    }
}
