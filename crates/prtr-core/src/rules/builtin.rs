use crate::error::PrtrError;
use crate::rules::parse_catalog_str;
use crate::rules::schema::RuleCatalog;

const BUSINESS_RULES_JSON: &str = include_str!("../../../../rules/business-rules.json");

/// Load the business rule catalog compiled into the library.
pub fn load_builtin() -> Result<RuleCatalog, PrtrError> {
    parse_catalog_str(BUSINESS_RULES_JSON)
}
