use std::io::{self, Write};

use crate::report::ValidationSummary;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Emit the failing-row listings after the per-rule counts.
    pub show_failures: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            show_failures: true,
        }
    }
}

/// Write the human-readable report.
///
/// Per rule: the description and the pass/fail counts. Then, for every rule
/// with failures, the failing row identifiers with their raw values.
pub fn write_summary<W: Write>(
    summary: &ValidationSummary,
    options: ReportOptions,
    out: &mut W,
) -> io::Result<()> {
    for rule in &summary.rules {
        writeln!(out, "{}", rule.description)?;
        writeln!(
            out,
            "Number of rows passing business rule checks: {}",
            rule.pass_count
        )?;
        writeln!(
            out,
            "Number of rows failing business rule checks: {}",
            rule.fail_count
        )?;
        writeln!(out)?;
    }

    if !options.show_failures || summary.is_clean() {
        return Ok(());
    }

    writeln!(out, "Rows failing business rule checks:")?;
    for rule in summary.rules.iter().filter(|r| !r.failures.is_empty()) {
        writeln!(out)?;
        writeln!(out, "Index  {}  ({})", rule.column, rule.table)?;
        let width = rule
            .failures
            .iter()
            .map(|f| f.row.to_string().len())
            .max()
            .unwrap_or(1)
            .max("Index".len());
        for failure in &rule.failures {
            writeln!(out, "{:<width$}  {}", failure.row, failure.value)?;
        }
    }

    Ok(())
}
