use std::path::{Path, PathBuf};

use crate::error::PrtrError;
use crate::model::{CellValue, Table, TableKind};
use crate::source::TableSource;

/// A directory holding one `<table>.csv` file per table, each with a
/// header row.
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> CsvDirectory {
        CsvDirectory { dir: dir.into() }
    }

    fn table_path(&self, kind: TableKind) -> PathBuf {
        self.dir.join(format!("{}.csv", kind.source_name()))
    }
}

impl TableSource for CsvDirectory {
    fn load_table(&self, kind: TableKind) -> Result<Table, PrtrError> {
        let path = self.table_path(kind);
        if !path.is_file() {
            return Err(PrtrError::MissingTable(kind.source_name().to_string()));
        }
        read_table(kind, &path)
    }

    fn backend_name(&self) -> &str {
        "csv"
    }
}

fn read_table(kind: TableKind, path: &Path) -> Result<Table, PrtrError> {
    let csv_error = |source: csv::Error| PrtrError::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut table = Table::new(kind, columns);
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        table.push_row(record.iter().map(parse_field).collect());
    }
    Ok(table)
}

/// Type a raw CSV field: empty is missing, anything that parses as a
/// float is a number, the rest is text exactly as written.
pub fn parse_field(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Missing;
    }
    match raw.parse::<f64>() {
        Ok(v) => CellValue::Number(v),
        Err(_) => CellValue::Text(raw.to_string()),
    }
}
