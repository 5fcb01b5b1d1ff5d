//! Field-level predicates.
//!
//! Every predicate is total: malformed, blank and missing values resolve
//! to `false` instead of an error.

use crate::model::CellValue;
use crate::rules::schema::CheckDef;

impl CheckDef {
    /// Apply this check to a single value.
    pub fn passes(&self, value: &CellValue) -> bool {
        match self {
            CheckDef::NonNegativeNumber => is_non_negative_number(value),
            CheckDef::FixedLength { length } => has_length(value, *length),
            CheckDef::Integral => is_integral(value),
            CheckDef::AllowList { values } => is_allowed(value, values),
        }
    }

    /// Short label used in rule listings.
    pub fn label(&self) -> String {
        match self {
            CheckDef::NonNegativeNumber => "number >= 0".into(),
            CheckDef::FixedLength { length } => format!("exactly {length} characters"),
            CheckDef::Integral => "integer".into(),
            CheckDef::AllowList { values } => format!("one of [{}]", values.join(", ")),
        }
    }
}

/// Numbers pass when >= 0. Text is trimmed and parsed as a float first;
/// digit separators (`1_000`, `1 000`) are not accepted.
pub fn is_non_negative_number(value: &CellValue) -> bool {
    let number = match value {
        CellValue::Number(v) => *v,
        CellValue::Text(s) => match s.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => return false,
        },
        CellValue::Missing => return false,
    };
    // NaN compares false
    number >= 0.0
}

/// Only text cells carry a length; numbers and missing values fail.
pub fn has_length(value: &CellValue, length: usize) -> bool {
    match value {
        CellValue::Text(s) => s.chars().count() == length,
        CellValue::Number(_) | CellValue::Missing => false,
    }
}

/// Only numeric cells qualify. Text is not coerced, even when it looks
/// like an integer.
pub fn is_integral(value: &CellValue) -> bool {
    match value {
        CellValue::Number(v) => v.is_finite() && v.trunc() == *v,
        CellValue::Text(_) | CellValue::Missing => false,
    }
}

/// Case-sensitive, whole-string membership.
pub fn is_allowed(value: &CellValue, allowed: &[String]) -> bool {
    match value {
        CellValue::Text(s) => allowed.iter().any(|a| a == s),
        CellValue::Number(_) | CellValue::Missing => false,
    }
}
