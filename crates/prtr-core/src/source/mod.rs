pub mod csv_dir;
pub mod xlsx;

use crate::error::PrtrError;
use crate::model::{Dataset, Table, TableKind};

/// Trait for tabular input backends.
pub trait TableSource {
    /// Load one named table. A table the input does not contain is
    /// reported as `PrtrError::MissingTable`.
    fn load_table(&self, kind: TableKind) -> Result<Table, PrtrError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Load the three tables a validation run needs.
pub fn load_dataset(source: &dyn TableSource) -> Result<Dataset, PrtrError> {
    let load = |kind: TableKind| -> Result<Table, PrtrError> {
        let table = source.load_table(kind)?;
        tracing::info!(
            backend = source.backend_name(),
            table = %kind,
            rows = table.row_count(),
            columns = table.columns.len(),
            "loaded table"
        );
        if table.row_count() == 0 {
            tracing::warn!(table = %kind, "table has no data rows");
        }
        Ok(table)
    };

    Ok(Dataset {
        report: load(TableKind::Report)?,
        facility: load(TableKind::Facility)?,
        pollutant_release: load(TableKind::PollutantRelease)?,
    })
}
