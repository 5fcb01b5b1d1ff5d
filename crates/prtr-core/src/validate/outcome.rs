use crate::model::Table;
use serde::Serialize;

/// Per-row outcome of one rule, aligned with the table's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFlags {
    pub rule_id: u32,
    pub column: String,
    /// `true` = PASS, one entry per row in source order.
    pub flags: Vec<bool>,
}

impl RuleFlags {
    pub fn pass_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn fail_count(&self) -> usize {
        self.flags.len() - self.pass_count()
    }

    /// Row identifiers of failing rows, in row order.
    pub fn failing_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(row, &pass)| (!pass).then_some(row))
    }
}

/// A source table together with the flags of every rule bound to it.
/// No row is ever removed.
#[derive(Debug, Clone, Serialize)]
pub struct ValidatedTable {
    pub table: Table,
    pub flags: Vec<RuleFlags>,
}

impl ValidatedTable {
    pub fn flags_for(&self, rule_id: u32) -> Option<&RuleFlags> {
        self.flags.iter().find(|f| f.rule_id == rule_id)
    }

    /// True if the row passes every rule bound to this table.
    pub fn is_row_valid(&self, row: usize) -> bool {
        self.flags.iter().all(|f| f.flags.get(row).copied().unwrap_or(false))
    }
}
