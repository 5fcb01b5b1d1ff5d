pub mod engine;
pub mod outcome;

pub use engine::{validate_dataset, validate_table};
pub use outcome::{RuleFlags, ValidatedTable};
