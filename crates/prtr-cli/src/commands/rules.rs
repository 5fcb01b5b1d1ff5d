use prtr_core::error::PrtrError;
use prtr_core::rules::builtin;
use prtr_core::rules::schema::CheckDef;

pub fn list() -> Result<(), PrtrError> {
    let catalog = builtin::load_builtin()?;

    println!("{} (v{})\n", catalog.name, catalog.version);

    let max_column = catalog
        .rules
        .iter()
        .map(|r| r.column.len())
        .max()
        .unwrap_or(10);

    println!(
        "  {:<4}  {:<16}  {:<width$}  Check",
        "Rule",
        "Table",
        "Column",
        width = max_column
    );
    println!("  {}", "-".repeat(4 + 2 + 16 + 2 + max_column + 2 + 20));

    for rule in &catalog.rules {
        println!(
            "  {:<4}  {:<16}  {:<width$}  {}",
            rule.id,
            rule.table,
            rule.column,
            rule.check.label(),
            width = max_column
        );
    }
    println!();

    Ok(())
}

pub fn explain(id: u32) -> Result<(), PrtrError> {
    let catalog = builtin::load_builtin()?;
    let rule = catalog.find(id).ok_or_else(|| {
        PrtrError::CatalogInvalid(format!(
            "unknown rule {id}. Available: {}",
            catalog
                .rules
                .iter()
                .map(|r| r.id.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    println!("{}\n", rule.description);
    println!("  Table:  {}", rule.table);
    println!("  Column: {}\n", rule.column);

    match &rule.check {
        CheckDef::NonNegativeNumber => {
            println!("A value passes when it is a number greater than or equal to zero.");
            println!("Text is accepted if it parses as a number after trimming spaces.");
            println!("Blank, missing and non-numeric values fail.");
        }
        CheckDef::FixedLength { length } => {
            println!("A value passes when it is text of exactly {length} characters.");
            println!("Numbers and missing values fail.");
        }
        CheckDef::Integral => {
            println!("A value passes when it is a number without a fractional part.");
            println!("For example 123 and 123.0 pass, 123.6 fails. Text always fails.");
        }
        CheckDef::AllowList { values } => {
            println!("A value passes when it matches one of these names exactly");
            println!("(case-sensitive, whole string):\n");
            for v in values {
                println!("  {v}");
            }
        }
    }
    println!();

    Ok(())
}
