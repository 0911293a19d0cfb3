//! Materialized query results
//!
//! A `QueryFrame` is the in-memory table produced by a fetch-as-table query:
//! named columns and fully buffered rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell of a materialized result set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// SQL NULL
    Null,
    /// Boolean
    Boolean(bool),
    /// Signed integer (any width up to 64 bits)
    Integer(i64),
    /// Unsigned integer that does not fit `i64`
    UInteger(u64),
    /// Floating point
    Double(f64),
    /// Text, including engine-specific values rendered as text
    Text(String),
    /// Raw bytes
    Blob(Vec<u8>),
}

impl CellValue {
    /// Check for SQL NULL
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Integer view, if this cell holds one
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::UInteger(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Text view, if this cell holds text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "NULL"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::UInteger(u) => write!(f, "{u}"),
            Self::Double(d) => write!(f, "{d}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Rows x named columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFrame {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl QueryFrame {
    /// Create a frame from column names and rows
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    /// Column names, in result order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in result order
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the result set has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All values of one column
    pub fn column(&self, name: &str) -> Option<Vec<&CellValue>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }

    /// Single cell lookup
    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// Convert to a JSON array of `{column: value}` records
    pub fn to_json_records(&self) -> serde_json::Value {
        let records = self
            .rows
            .iter()
            .map(|row| {
                let object = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| {
                        (
                            name.clone(),
                            serde_json::to_value(cell).unwrap_or(serde_json::Value::Null),
                        )
                    })
                    .collect::<serde_json::Map<_, _>>();
                serde_json::Value::Object(object)
            })
            .collect();
        serde_json::Value::Array(records)
    }
}

impl fmt::Display for QueryFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let header = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(f, "{}", header.trim_end())?;

        for row in &rendered {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(c, w)| format!("{c:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }

        write!(
            f,
            "[{} rows x {} columns]",
            self.row_count(),
            self.column_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bread_crumbs() -> QueryFrame {
        QueryFrame::new(
            vec!["id".into(), "location".into(), "tastiness".into()],
            vec![
                vec![
                    CellValue::Integer(3),
                    CellValue::Text("Pond Edge".into()),
                    CellValue::Integer(9),
                ],
                vec![
                    CellValue::Integer(1),
                    CellValue::Text("Park Bench".into()),
                    CellValue::Integer(8),
                ],
            ],
        )
    }

    #[test]
    fn shape() {
        let frame = bread_crumbs();
        assert_eq!(frame.row_count(), 2);
        assert_eq!(frame.column_count(), 3);
        assert!(!frame.is_empty());
    }

    #[test]
    fn column_lookup() {
        let frame = bread_crumbs();
        let tastiness: Vec<i64> = frame
            .column("tastiness")
            .unwrap()
            .into_iter()
            .filter_map(CellValue::as_i64)
            .collect();
        assert_eq!(tastiness, vec![9, 8]);
        assert!(frame.column("crumbs").is_none());
    }

    #[test]
    fn cell_lookup() {
        let frame = bread_crumbs();
        assert_eq!(frame.get(1, "location").and_then(CellValue::as_str), Some("Park Bench"));
        assert!(frame.get(5, "location").is_none());
    }

    #[test]
    fn display_renders_header_and_footer() {
        let text = bread_crumbs().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id  location    tastiness"));
        assert_eq!(lines.next(), Some("3   Pond Edge   9"));
        assert!(text.ends_with("[2 rows x 3 columns]"));
    }

    #[test]
    fn json_records_use_column_names() {
        let json = bread_crumbs().to_json_records();
        assert_eq!(json[0]["location"], "Pond Edge");
        assert_eq!(json[1]["id"], 1);
    }

    #[test]
    fn null_cells() {
        assert!(CellValue::Null.is_null());
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::UInteger(u64::MAX).as_i64(), None);
    }
}
