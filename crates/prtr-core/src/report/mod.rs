pub mod text;

use crate::model::{CellValue, TableKind};
use crate::rules::schema::RuleCatalog;
use crate::validate::ValidatedTable;
use serde::Serialize;

pub use text::{write_summary, ReportOptions};

/// A row that failed a rule, with its original value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailingRow {
    /// 0-based position in the source table.
    pub row: usize,
    pub value: CellValue,
}

/// Aggregated result of one rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleOutcome {
    pub rule_id: u32,
    pub description: String,
    pub table: TableKind,
    pub column: String,
    pub row_count: usize,
    pub pass_count: usize,
    pub fail_count: usize,
    /// Failing rows in source order.
    pub failures: Vec<FailingRow>,
}

/// Result of a full validation run, one entry per rule in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    pub catalog_name: String,
    pub catalog_version: String,
    pub rules: Vec<RuleOutcome>,
}

impl ValidationSummary {
    pub fn total_failures(&self) -> usize {
        self.rules.iter().map(|r| r.fail_count).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.total_failures() == 0
    }
}

/// Aggregate validated tables into per-rule counts and failing-row listings.
///
/// Rules whose table or flags are absent from `validated` are skipped.
pub fn summarize(validated: &[ValidatedTable], catalog: &RuleCatalog) -> ValidationSummary {
    let mut rules = Vec::with_capacity(catalog.rules.len());

    for rule in &catalog.rules {
        let Some(vt) = validated.iter().find(|vt| vt.table.kind == rule.table) else {
            tracing::warn!(rule = rule.id, table = %rule.table, "rule skipped: table not validated");
            continue;
        };
        let Some(flags) = vt.flags_for(rule.id) else {
            tracing::warn!(rule = rule.id, table = %rule.table, "rule skipped: no flags");
            continue;
        };
        let Some(col) = vt.table.column_index(&rule.column) else {
            tracing::warn!(
                rule = rule.id,
                table = %rule.table,
                column = %rule.column,
                "rule skipped: column not found"
            );
            continue;
        };

        let failures: Vec<FailingRow> = flags
            .failing_rows()
            .map(|row| FailingRow {
                row,
                value: vt.table.cell(row, col).clone(),
            })
            .collect();

        rules.push(RuleOutcome {
            rule_id: rule.id,
            description: rule.description.clone(),
            table: rule.table,
            column: rule.column.clone(),
            row_count: flags.flags.len(),
            pass_count: flags.pass_count(),
            fail_count: failures.len(),
            failures,
        });
    }

    ValidationSummary {
        catalog_name: catalog.name.clone(),
        catalog_version: catalog.version.clone(),
        rules,
    }
}
