use prtr_core::error::PrtrError;
use prtr_core::report::{write_summary, ReportOptions, ValidationSummary};
use std::io::Write;

pub fn print(summary: &ValidationSummary, show_failures: bool) -> Result<(), PrtrError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_summary(summary, ReportOptions { show_failures }, &mut out)?;
    out.flush()?;
    Ok(())
}
