pub mod builtin;
pub mod check;
pub mod schema;

use crate::error::PrtrError;
use crate::model::TableKind;
use schema::{CheckDef, RuleCatalog, RuleDef};
use std::collections::HashSet;

impl RuleCatalog {
    /// Rules bound to `table`, in declaration order.
    pub fn rules_for(&self, table: TableKind) -> impl Iterator<Item = &RuleDef> + '_ {
        self.rules.iter().filter(move |r| r.table == table)
    }

    pub fn find(&self, id: u32) -> Option<&RuleDef> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn find_column(&self, column: &str) -> Option<&RuleDef> {
        self.rules.iter().find(|r| r.column == column)
    }
}

/// Parse a catalog from a JSON string and check that it is well-formed.
pub fn parse_catalog_str(json: &str) -> Result<RuleCatalog, PrtrError> {
    let catalog: RuleCatalog = serde_json::from_str(json)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate that a catalog is well-formed.
pub fn validate_catalog(catalog: &RuleCatalog) -> Result<(), PrtrError> {
    if catalog.rules.is_empty() {
        return Err(PrtrError::CatalogInvalid("rules must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for rule in &catalog.rules {
        if !seen.insert(rule.id) {
            return Err(PrtrError::CatalogInvalid(format!(
                "duplicate rule id {}",
                rule.id
            )));
        }

        if rule.column.trim().is_empty() {
            return Err(PrtrError::CatalogInvalid(format!(
                "rule {} has an empty column name",
                rule.id
            )));
        }

        if rule.table == TableKind::Facility {
            return Err(PrtrError::CatalogInvalid(format!(
                "rule {} targets table 'facility', which carries no rules",
                rule.id
            )));
        }

        match &rule.check {
            CheckDef::FixedLength { length: 0 } => {
                return Err(PrtrError::CatalogInvalid(format!(
                    "rule {} has a fixed length of zero",
                    rule.id
                )));
            }
            CheckDef::AllowList { values } if values.is_empty() => {
                return Err(PrtrError::CatalogInvalid(format!(
                    "rule {} has an empty allow list",
                    rule.id
                )));
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_catalog() {
        let json = r#"{
            "name": "Test",
            "version": "1.0",
            "rules": [
                {
                    "id": 5,
                    "table": "pollutantRelease",
                    "column": "ReleaseMediumName",
                    "description": "medium",
                    "check": { "kind": "allow_list", "values": ["Air", "Water"] }
                }
            ]
        }"#;
        let catalog = parse_catalog_str(json).unwrap();
        assert_eq!(catalog.rules.len(), 1);
        assert_eq!(catalog.rules[0].table, TableKind::PollutantRelease);
        assert!(catalog.find(5).is_some());
    }

    #[test]
    fn test_empty_rules_rejected() {
        let json = r#"{ "name": "Bad", "version": "1.0", "rules": [] }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [
                { "id": 1, "table": "report", "column": "A", "description": "", "check": { "kind": "integral" } },
                { "id": 1, "table": "report", "column": "B", "description": "", "check": { "kind": "integral" } }
            ]
        }"#;
        assert!(matches!(
            parse_catalog_str(json),
            Err(PrtrError::CatalogInvalid(_))
        ));
    }

    #[test]
    fn test_empty_allow_list_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [
                { "id": 1, "table": "report", "column": "A", "description": "", "check": { "kind": "allow_list", "values": [] } }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_facility_rule_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [
                { "id": 1, "table": "facility", "column": "A", "description": "", "check": { "kind": "integral" } }
            ]
        }"#;
        assert!(parse_catalog_str(json).is_err());
    }

    #[test]
    fn test_unknown_check_kind_rejected() {
        let json = r#"{
            "name": "Bad",
            "version": "1.0",
            "rules": [
                { "id": 1, "table": "report", "column": "A", "description": "", "check": { "kind": "regex" } }
            ]
        }"#;
        assert!(matches!(parse_catalog_str(json), Err(PrtrError::Json(_))));
    }
}
