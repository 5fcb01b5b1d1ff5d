use prtr_core::error::PrtrError;
use prtr_core::rules::builtin;
use prtr_core::source::csv_dir::CsvDirectory;
use prtr_core::source::xlsx::XlsxWorkbook;
use prtr_core::source::TableSource;
use std::path::{Path, PathBuf};

use crate::output;

/// Validate `input` and print the report. Returns whether every row
/// passed every rule.
pub fn run(
    input: &Path,
    output_format: &str,
    output_file: Option<PathBuf>,
    no_listing: bool,
) -> Result<bool, PrtrError> {
    let catalog = builtin::load_builtin()?;

    // A directory holds one CSV per table; anything else is a workbook
    let source: Box<dyn TableSource> = if input.is_dir() {
        Box::new(CsvDirectory::new(input))
    } else {
        Box::new(XlsxWorkbook::open(input)?)
    };

    let _span = tracing::info_span!("check", input = %input.display()).entered();
    let run = prtr_core::check_source(source.as_ref(), &catalog)?;
    let summary = &run.summary;

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            let json = serde_json::to_string_pretty(summary)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Checked {} rule(s), {} failing value(s), written to {}",
                summary.rules.len(),
                summary.total_failures(),
                path.display()
            );
        }
        None => match output_format {
            "json" => output::json::print(summary)?,
            _ => output::text::print(summary, !no_listing)?,
        },
    }

    Ok(summary.is_clean())
}
