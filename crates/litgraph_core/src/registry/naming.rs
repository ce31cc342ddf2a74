//! Name format rules shared by attribute, concept and relation registries.

use crate::registry::{SchemaError, SchemaResult};
use once_cell::sync::Lazy;
use regex::Regex;

static SCHEMA_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][A-Za-z0-9]*$").expect("schema name pattern is a valid regex")
});

/// Accepts camelCase keys such as `articleTitle` or `evoAlgo`.
pub(crate) fn validate_name(kind: &'static str, name: &str) -> SchemaResult<()> {
    if SCHEMA_NAME.is_match(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
