use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PrtrError {
    #[error("failed to open workbook: {0}")]
    Workbook(String),

    #[error("table '{0}' not found in input")]
    MissingTable(String),

    #[error("column '{column}' not found in table '{table}'")]
    MissingColumn { table: String, column: String },

    #[error("failed to read CSV file {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("invalid rule catalog: {0}")]
    CatalogInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
