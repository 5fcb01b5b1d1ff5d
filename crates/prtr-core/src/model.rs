use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value as it was read from the input.
///
/// Loaders decide the variant once, when the row is read, so rule
/// predicates only ever match on these three cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> CellValue {
        CellValue::Text(s.into())
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<i64> for CellValue {
    fn from(v: i64) -> Self {
        CellValue::Number(v as f64)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, "<missing>"),
        }
    }
}

static MISSING: CellValue = CellValue::Missing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableKind {
    #[serde(rename = "report")]
    Report,
    #[serde(rename = "facility")]
    Facility,
    #[serde(rename = "pollutantRelease")]
    PollutantRelease,
}

impl TableKind {
    /// Sheet (or CSV file stem) the table is read from.
    pub fn source_name(self) -> &'static str {
        match self {
            TableKind::Report => "report",
            TableKind::Facility => "facility",
            TableKind::PollutantRelease => "pollutantRelease",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.source_name())
    }
}

/// A loaded table with named columns. Row identifiers are 0-based
/// positions in the source, header excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub kind: TableKind,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(kind: TableKind, columns: Vec<String>) -> Table {
        Table {
            kind,
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with `Missing` and dropping
    /// cells beyond the header width.
    pub fn push_row(&mut self, mut cells: Vec<CellValue>) {
        cells.resize(self.columns.len(), CellValue::Missing);
        self.rows.push(cells);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Value at (`row`, `col`). Cells past the end of a short row, or
    /// past the last row, read as `Missing`.
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .unwrap_or(&MISSING)
    }

    /// Values of one column in row order.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).unwrap_or(&MISSING)),
        )
    }
}

/// The three tables a validation run consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub report: Table,
    /// Loaded for completeness; no rule targets it.
    pub facility: Table,
    pub pollutant_release: Table,
}

impl Dataset {
    pub fn table(&self, kind: TableKind) -> &Table {
        match kind {
            TableKind::Report => &self.report,
            TableKind::Facility => &self.facility,
            TableKind::PollutantRelease => &self.pollutant_release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_rows_padded_with_missing() {
        let mut table = Table::new(TableKind::Report, vec!["A".into(), "B".into()]);
        table.push_row(vec![CellValue::from(1.0)]);
        assert_eq!(table.rows[0], vec![CellValue::Number(1.0), CellValue::Missing]);
    }

    #[test]
    fn test_long_rows_truncated() {
        let mut table = Table::new(TableKind::Report, vec!["A".into()]);
        table.push_row(vec!["x".into(), "y".into()]);
        assert_eq!(table.rows[0].len(), 1);
    }

    #[test]
    fn test_column_lookup() {
        let mut table = Table::new(TableKind::Report, vec!["A".into(), "B".into()]);
        table.push_row(vec!["a1".into(), "b1".into()]);
        table.push_row(vec!["a2".into(), "b2".into()]);
        let b: Vec<_> = table.column("B").unwrap().cloned().collect();
        assert_eq!(b, vec![CellValue::text("b1"), CellValue::text("b2")]);
        assert!(table.column("C").is_none());
    }

    #[test]
    fn test_cell_outside_short_row_is_missing() {
        let table: Table =
            serde_json::from_str(r#"{"kind":"report","columns":["A","B"],"rows":[[1.0]]}"#)
                .unwrap();
        assert_eq!(table.cell(0, 0), &CellValue::Number(1.0));
        assert_eq!(table.cell(0, 1), &CellValue::Missing);
        assert_eq!(table.cell(5, 0), &CellValue::Missing);
        let b: Vec<_> = table.column("B").unwrap().cloned().collect();
        assert_eq!(b, vec![CellValue::Missing]);
    }

    #[test]
    fn test_display_number_without_trailing_fraction() {
        assert_eq!(CellValue::Number(2017.0).to_string(), "2017");
        assert_eq!(CellValue::Number(123.6).to_string(), "123.6");
        assert_eq!(CellValue::Missing.to_string(), "<missing>");
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            CellValue::Number(1.5),
            CellValue::text("Air"),
            CellValue::Missing,
        ])
        .unwrap();
        assert_eq!(json, r#"[1.5,"Air",null]"#);
    }
}
