//! YAML to JSON tree conversion
//!
//! YAML mappings may use any value as a key (`1: one`, `true: yes`, even
//! sequences). JSON objects only allow strings, so non-string keys are
//! stringified on the way through.

use crate::error::ConvertError;
use serde_json::{Map, Number, Value as Json};
use serde_yaml::Value as Yaml;

/// Convert a YAML value into a JSON value.
///
/// - string keys are kept, scalar keys use their display form (`1`, `true`,
///   `null`), composite keys become their compact JSON encoding
/// - non-finite floats (`.nan`, `.inf`) become `null`
/// - tagged values (`!Tag value`) are replaced by their inner value
///
/// # Examples
///
/// ```
/// use utilkit::yaml_to_json;
/// use serde_json::json;
///
/// let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\nnested: {true: yes}").unwrap();
/// let json = yaml_to_json(yaml).unwrap();
/// assert_eq!(json, json!({"1": "one", "nested": {"true": "yes"}}));
/// ```
pub fn yaml_to_json(value: Yaml) -> Result<Json, ConvertError> {
    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => number_to_json(&n),
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => Json::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, yaml_to_json(value)?);
            }
            Json::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

/// Parse a YAML document and convert it into a JSON value.
pub fn yaml_str_to_json(input: &str) -> Result<Json, ConvertError> {
    let value: Yaml = serde_yaml::from_str(input)?;
    yaml_to_json(value)
}

fn number_to_json(n: &serde_yaml::Number) -> Json {
    if let Some(i) = n.as_i64() {
        Json::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        Json::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Json::Null, Json::Number)
    }
}

fn key_to_string(key: Yaml) -> Result<String, ConvertError> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Tagged(tagged) => key_to_string(tagged.value),
        composite => Ok(serde_json::to_string(&yaml_to_json(composite)?)?),
    }
}
