use crate::error::PrtrError;
use crate::model::{Dataset, Table, TableKind};
use crate::rules::schema::{RuleCatalog, RuleDef};
use crate::validate::outcome::{RuleFlags, ValidatedTable};

/// Validate every table that has rules bound to it.
///
/// Tables come back in the order their first rule is declared.
pub fn validate_dataset(
    dataset: &Dataset,
    catalog: &RuleCatalog,
) -> Result<Vec<ValidatedTable>, PrtrError> {
    let mut order: Vec<TableKind> = Vec::new();
    for rule in &catalog.rules {
        if !order.contains(&rule.table) {
            order.push(rule.table);
        }
    }

    order
        .into_iter()
        .map(|kind| {
            let rules: Vec<&RuleDef> = catalog.rules_for(kind).collect();
            validate_table(dataset.table(kind), &rules)
        })
        .collect()
}

/// Apply each rule to every row of `table`.
///
/// All target columns are checked up front, so a missing column fails the
/// whole table before any row is evaluated.
pub fn validate_table(table: &Table, rules: &[&RuleDef]) -> Result<ValidatedTable, PrtrError> {
    let mut bound = Vec::with_capacity(rules.len());
    for rule in rules {
        let idx = table
            .column_index(&rule.column)
            .ok_or_else(|| PrtrError::MissingColumn {
                table: table.kind.to_string(),
                column: rule.column.clone(),
            })?;
        bound.push((*rule, idx));
    }

    let flags = bound
        .into_iter()
        .map(|(rule, idx)| {
            let flags: Vec<bool> = (0..table.row_count())
                .map(|row| rule.check.passes(table.cell(row, idx)))
                .collect();
            let rule_flags = RuleFlags {
                rule_id: rule.id,
                column: rule.column.clone(),
                flags,
            };
            tracing::debug!(
                rule = rule.id,
                table = %table.kind,
                column = %rule.column,
                passed = rule_flags.pass_count(),
                failed = rule_flags.fail_count(),
                "rule evaluated"
            );
            rule_flags
        })
        .collect();

    Ok(ValidatedTable {
        table: table.clone(),
        flags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CellValue;
    use crate::rules::schema::CheckDef;

    fn rule(id: u32, column: &str, check: CheckDef) -> RuleDef {
        RuleDef {
            id,
            table: TableKind::Report,
            column: column.into(),
            description: format!("rule {id}"),
            check,
        }
    }

    fn report_table() -> Table {
        let mut table = Table::new(
            TableKind::Report,
            vec!["ReportID".into(), "CountryCode".into()],
        );
        table.push_row(vec![CellValue::Number(1.0), "NO".into()]);
        table.push_row(vec![CellValue::Number(2.5), "NOR".into()]);
        table.push_row(vec![CellValue::Missing, CellValue::Missing]);
        table
    }

    #[test]
    fn test_flags_aligned_with_rows() {
        let table = report_table();
        let id_rule = rule(3, "ReportID", CheckDef::Integral);
        let cc_rule = rule(2, "CountryCode", CheckDef::FixedLength { length: 2 });
        let validated = validate_table(&table, &[&cc_rule, &id_rule]).unwrap();

        assert_eq!(validated.flags.len(), 2);
        assert_eq!(validated.flags[0].rule_id, 2);
        assert_eq!(validated.flags_for(2).unwrap().flags, vec![true, false, false]);
        assert_eq!(validated.flags_for(3).unwrap().flags, vec![true, false, false]);
        assert_eq!(validated.table.row_count(), 3);
        assert!(validated.is_row_valid(0));
        assert!(!validated.is_row_valid(1));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let table = report_table();
        let r = rule(1, "ReportingYear", CheckDef::NonNegativeNumber);
        let err = validate_table(&table, &[&r]).unwrap_err();
        assert!(matches!(
            err,
            PrtrError::MissingColumn { ref column, .. } if column == "ReportingYear"
        ));
    }

    #[test]
    fn test_failing_rows_in_order() {
        let flags = RuleFlags {
            rule_id: 1,
            column: "X".into(),
            flags: vec![false, true, false, true],
        };
        assert_eq!(flags.failing_rows().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(flags.pass_count() + flags.fail_count(), 4);
    }

    #[test]
    fn test_short_rows_read_as_missing() {
        let table: Table =
            serde_json::from_str(r#"{"kind":"report","columns":["A","B"],"rows":[[1.0]]}"#)
                .unwrap();
        let r = rule(3, "B", CheckDef::Integral);
        let validated = validate_table(&table, &[&r]).unwrap();
        assert_eq!(validated.flags[0].flags, vec![false]);

        let summary = crate::report::summarize(
            &[validated],
            &RuleCatalog {
                name: "Test".into(),
                version: "1".into(),
                rules: vec![r],
            },
        );
        assert_eq!(summary.rules[0].failures[0].value, CellValue::Missing);
    }

    #[test]
    fn test_empty_table_yields_empty_flags() {
        let table = Table::new(TableKind::Report, vec!["ReportID".into()]);
        let r = rule(3, "ReportID", CheckDef::Integral);
        let validated = validate_table(&table, &[&r]).unwrap();
        assert!(validated.flags[0].flags.is_empty());
    }
}
