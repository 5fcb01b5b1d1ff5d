pub mod error;
pub mod model;
pub mod report;
pub mod rules;
pub mod source;
pub mod validate;

use error::PrtrError;
use model::Dataset;
use report::ValidationSummary;
use rules::schema::RuleCatalog;
use source::TableSource;
use validate::ValidatedTable;

/// Everything one validation run produces: the flagged tables and the
/// per-rule summary derived from them.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    pub tables: Vec<ValidatedTable>,
    pub summary: ValidationSummary,
}

/// Main API entry point: load the tables from `source` and check them
/// against `catalog`.
pub fn check_source(
    source: &dyn TableSource,
    catalog: &RuleCatalog,
) -> Result<ValidationRun, PrtrError> {
    let dataset = source::load_dataset(source)?;
    check_dataset(&dataset, catalog)
}

/// Check already-loaded tables against `catalog`.
///
/// Bad field values never abort the run; only a missing column does.
pub fn check_dataset(dataset: &Dataset, catalog: &RuleCatalog) -> Result<ValidationRun, PrtrError> {
    let tables = validate::validate_dataset(dataset, catalog)?;
    let summary = report::summarize(&tables, catalog);

    tracing::info!(
        rules = summary.rules.len(),
        failures = summary.total_failures(),
        "validation finished"
    );

    Ok(ValidationRun { tables, summary })
}
