//! YAML parser for pagination configuration
//!
//! JSON is valid YAML, so both formats go through the same parser.

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};
use tracing::debug;

/// Load a configuration from a YAML string, applied over the defaults
///
/// # Examples
///
/// ```
/// use pagination_html::loader::load_config_from_str;
///
/// let config = load_config_from_str("use_dots: true\ncount_pages_pair_limit: 1").unwrap();
/// assert!(config.use_dots);
/// assert_eq!(config.count_pages_pair_limit, 1);
/// ```
pub fn load_config_from_str(yaml: &str) -> Result<PaginationConfig> {
    let values = load_values_from_str(yaml)?;
    Ok(PaginationConfig::from_values(&values))
}

/// Parse a YAML string into an untyped key/value bag
///
/// An empty document yields an empty bag. Any other non-mapping document is
/// a configuration error.
pub fn load_values_from_str(yaml: &str) -> Result<JsonObject> {
    if yaml.trim().is_empty() {
        return Ok(JsonObject::new());
    }

    let value: JsonValue = serde_yaml::from_str(yaml)?;

    match value {
        JsonValue::Object(map) => {
            debug!("Loaded {} configuration keys", map.len());
            Ok(map)
        }
        JsonValue::Null => Ok(JsonObject::new()),
        other => Err(Error::config(format!(
            "Pagination configuration must be a mapping, got {}",
            kind_of(&other)
        ))),
    }
}

fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
