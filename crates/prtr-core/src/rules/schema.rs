use crate::model::TableKind;
use serde::{Deserialize, Serialize};

/// The full set of business rules applied in one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleCatalog {
    pub name: String,
    pub version: String,
    /// Rules in declaration order; reports follow this order.
    pub rules: Vec<RuleDef>,
}

/// A single business rule bound to one column of one table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDef {
    pub id: u32,
    pub table: TableKind,
    pub column: String,
    pub description: String,
    pub check: CheckDef,
}

/// The predicate a rule applies to each field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckDef {
    /// Number (or numeric text) that is >= 0.
    NonNegativeNumber,
    /// Text with exactly `length` characters.
    FixedLength { length: usize },
    /// Number without a fractional part.
    Integral,
    /// Text matching one of `values` exactly.
    AllowList { values: Vec<String> },
}
