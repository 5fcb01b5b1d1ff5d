use prtr_core::error::PrtrError;
use prtr_core::report::ValidationSummary;

pub fn print(summary: &ValidationSummary) -> Result<(), PrtrError> {
    let json = serde_json::to_string_pretty(summary)?;
    println!("{json}");
    Ok(())
}
