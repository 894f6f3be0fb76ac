//! Request parameter objects.
//!
//! Every Admin and Upload API operation takes one parameter object. Objects
//! are validated with [`Params::check`] and flattened into a [`ParamsDict`]
//! with [`Params::to_params_dict`] before they reach the wire.

use crate::error::{ParamsError, ParamsResult};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

mod generate;
mod mappings;
mod presets;
mod resources;
mod streaming;
mod transforms;
mod upload;

pub use generate::*;
pub use mappings::*;
pub use presets::*;
pub use resources::*;
pub use streaming::*;
pub use transforms::*;
pub use upload::*;

/// Flat string-keyed request parameters.
pub type ParamsDict = BTreeMap<String, String>;

/// Asset kind, part of most resource URLs rather than the parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Video,
    Raw,
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Video => "video",
            ResourceType::Raw => "raw",
            ResourceType::Auto => "auto",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(ResourceType::Image),
            "video" => Ok(ResourceType::Video),
            "raw" => Ok(ResourceType::Raw),
            "auto" => Ok(ResourceType::Auto),
            other => Err(format!("unknown resource type: {other}")),
        }
    }
}

pub trait Params: Serialize {
    /// Fails on the first missing or conflicting required field.
    fn check(&self) -> ParamsResult<()>;

    fn to_params_dict(&self) -> ParamsResult<ParamsDict> {
        flatten(self)
    }
}

/// Flatten any serializable struct into wire parameters.
///
/// Nulls and empty lists are dropped, booleans become `"true"`/`"false"`,
/// scalar lists are comma-joined, anything else nested is sent as JSON.
pub fn flatten<T: Serialize + ?Sized>(value: &T) -> ParamsResult<ParamsDict> {
    let mut dict = ParamsDict::new();
    let Value::Object(map) = serde_json::to_value(value)? else {
        return Ok(dict);
    };
    for (key, value) in map {
        if let Some(wire) = wire_value(value) {
            dict.insert(key, wire);
        }
    }
    Ok(dict)
}

fn wire_value(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) if items.iter().all(is_scalar) => Some(
            items
                .into_iter()
                .filter_map(wire_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        other => Some(other.to_string()),
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::Bool(_) | Value::Number(_) | Value::String(_))
}

pub(crate) fn require(value: &str, field: &'static str) -> ParamsResult<()> {
    if value.trim().is_empty() {
        return Err(ParamsError::Missing(field));
    }
    Ok(())
}

pub(crate) fn require_opt(value: Option<&str>, field: &'static str) -> ParamsResult<()> {
    require(value.unwrap_or_default(), field)
}

/// Ordered key/value pairs sent as `key=value|key2=value2`.
///
/// Used for `context` and structured `metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringDict(Vec<(String, String)>);

impl StringDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}={}", escape_pair_part(k), escape_pair_part(v)))
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn escape_pair_part(part: &str) -> String {
    part.replace('=', "\\=").replace('|', "\\|")
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringDict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = StringDict::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

impl Serialize for StringDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_none();
        }
        serializer.serialize_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: Option<String>,
        enabled: Option<bool>,
        count: Option<u32>,
        tags: Vec<String>,
        empty: Vec<String>,
        nested: Option<Value>,
        r#type: Option<String>,
    }

    #[test]
    fn flattens_fields_to_wire_values() {
        let sample = Sample {
            name: Some("n".into()),
            enabled: Some(false),
            count: Some(7),
            tags: vec!["a".into(), "b".into()],
            empty: Vec::new(),
            nested: Some(serde_json::json!({"k": "v"})),
            r#type: Some("upload".into()),
        };
        let dict = flatten(&sample).unwrap();
        assert_eq!(dict["name"], "n");
        assert_eq!(dict["enabled"], "false");
        assert_eq!(dict["count"], "7");
        assert_eq!(dict["tags"], "a,b");
        assert_eq!(dict["nested"], r#"{"k":"v"}"#);
        assert_eq!(dict["type"], "upload");
        assert!(!dict.contains_key("empty"));
    }

    #[test]
    fn drops_none_values() {
        let sample = Sample {
            name: None,
            enabled: None,
            count: None,
            tags: Vec::new(),
            empty: Vec::new(),
            nested: None,
            r#type: None,
        };
        assert!(flatten(&sample).unwrap().is_empty());
    }

    #[test]
    fn string_dict_escapes_separators() {
        let dict: StringDict = [("caption", "a=b"), ("alt", "x|y")].into_iter().collect();
        assert_eq!(dict.encode(), "caption=a\\=b|alt=x\\|y");
    }

    #[test]
    fn string_dict_insert_replaces_existing_key() {
        let mut dict = StringDict::new();
        dict.insert("k", "1");
        dict.insert("k", "2");
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("k"), Some("2"));
    }
}
