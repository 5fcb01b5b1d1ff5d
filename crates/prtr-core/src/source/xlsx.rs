use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader};

use crate::error::PrtrError;
use crate::model::{CellValue, Table, TableKind};
use crate::source::TableSource;

/// A spreadsheet workbook (xlsx, xls, xlsb or ods) with one sheet per table.
///
/// The first row of each sheet holds the column names.
pub struct XlsxWorkbook {
    bytes: Vec<u8>,
}

impl XlsxWorkbook {
    pub fn open(path: &Path) -> Result<XlsxWorkbook, PrtrError> {
        let bytes = std::fs::read(path)?;
        Ok(XlsxWorkbook { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> XlsxWorkbook {
        XlsxWorkbook { bytes }
    }
}

impl TableSource for XlsxWorkbook {
    fn load_table(&self, kind: TableKind) -> Result<Table, PrtrError> {
        let cursor = Cursor::new(self.bytes.as_slice());
        let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
            .map_err(|e| PrtrError::Workbook(e.to_string()))?;

        let sheet_name = kind.source_name();
        if !workbook.sheet_names().iter().any(|s| s == sheet_name) {
            return Err(PrtrError::MissingTable(sheet_name.to_string()));
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e| PrtrError::Workbook(format!("sheet '{sheet_name}': {e}")))?;

        let mut rows = range.rows();
        let columns: Vec<String> = match rows.next() {
            Some(header) => header.iter().map(header_name).collect(),
            None => Vec::new(),
        };

        let mut table = Table::new(kind, columns);
        for row in rows {
            table.push_row(row.iter().map(cell_value).collect());
        }
        Ok(table)
    }

    fn backend_name(&self) -> &str {
        "workbook"
    }
}

fn header_name(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Map a spreadsheet cell onto the three-way value model.
///
/// Booleans and dates keep their display text so they are reported as
/// written; error cells such as `#N/A` count as missing.
pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::from(*i),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Empty | Data::Error(_) => CellValue::Missing,
        // Display would print the raw serial number, which parses as a float
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => CellValue::Text(datetime.to_string()),
            None => CellValue::Text(format!("invalid date ({dt})")),
        },
        other => CellValue::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::schema::CheckDef;

    #[test]
    fn test_numeric_cells() {
        assert_eq!(cell_value(&Data::Int(2017)), CellValue::Number(2017.0));
        assert_eq!(cell_value(&Data::Float(-8000.0)), CellValue::Number(-8000.0));
    }

    #[test]
    fn test_text_cells_kept_verbatim() {
        assert_eq!(
            cell_value(&Data::String(" ".into())),
            CellValue::text(" ")
        );
        assert_eq!(
            cell_value(&Data::String("-8000.0".into())),
            CellValue::text("-8000.0")
        );
    }

    #[test]
    fn test_empty_and_error_cells_are_missing() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Missing);
        assert_eq!(
            cell_value(&Data::Error(calamine::CellErrorType::NA)),
            CellValue::Missing
        );
    }

    #[test]
    fn test_date_cell_fails_numeric_rule() {
        let cell = Data::DateTime(calamine::ExcelDateTime::new(
            43000.5,
            calamine::ExcelDateTimeType::DateTime,
            false,
        ));
        let value = cell_value(&cell);
        assert_eq!(value, CellValue::text("2017-09-22 12:00:00"));
        assert!(!CheckDef::NonNegativeNumber.passes(&value));
        assert!(!CheckDef::Integral.passes(&value));
    }

    #[test]
    fn test_bool_cell_becomes_text() {
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::text("true"));
    }

    #[test]
    fn test_header_names_trimmed() {
        assert_eq!(header_name(&Data::String(" ReportID ".into())), "ReportID");
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let workbook = XlsxWorkbook::from_bytes(b"not a workbook".to_vec());
        assert!(matches!(
            workbook.load_table(TableKind::Report),
            Err(PrtrError::Workbook(_))
        ));
    }
}
