//! Markup decoding for configuration sources.
//!
//! Responsibilities:
//! - Pick a markup from a file extension.
//! - Decode TOML and JSON documents into `ConfigTree`s.
//!
//! Does NOT handle:
//! - Locating or reading files (see `loader`).
//!
//! Invariants:
//! - A document root must be a table/object.
//! - TOML datetimes decode to their string form; JSON `null`s are dropped.
//! - JSON integers outside the `i64` range are rejected, never widened to floats.

use std::path::Path;

use crate::error::ConfigError;
use crate::tree::{ConfigTree, ConfigValue};

/// Supported configuration markups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Picks the markup for a path. `.json` is JSON; everything else, `.conf` included, is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }

    /// Returns true if `ext` names a markup this crate understands.
    pub fn is_supported_extension(ext: &str) -> bool {
        crate::constants::RESOURCE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    /// Decodes `contents` into a tree. `origin` names the source in errors.
    pub fn decode(self, contents: &str, origin: &str) -> Result<ConfigTree, ConfigError> {
        match self {
            Format::Toml => decode_toml(contents, origin),
            Format::Json => decode_json(contents, origin),
        }
    }
}

fn malformed(origin: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::Malformed {
        origin: origin.to_string(),
        message: message.into(),
    }
}

fn decode_toml(contents: &str, origin: &str) -> Result<ConfigTree, ConfigError> {
    let table: toml::Table =
        toml::from_str(contents).map_err(|e| malformed(origin, e.message()))?;
    Ok(toml_table(table))
}

fn toml_table(table: toml::Table) -> ConfigTree {
    table
        .into_iter()
        .map(|(key, value)| (key, toml_value(value)))
        .collect()
}

fn toml_value(value: toml::Value) -> ConfigValue {
    match value {
        toml::Value::String(s) => ConfigValue::String(s),
        toml::Value::Integer(n) => ConfigValue::Integer(n),
        toml::Value::Float(n) => ConfigValue::Float(n),
        toml::Value::Boolean(b) => ConfigValue::Boolean(b),
        toml::Value::Datetime(dt) => ConfigValue::String(dt.to_string()),
        toml::Value::Array(items) => ConfigValue::List(items.into_iter().map(toml_value).collect()),
        toml::Value::Table(table) => ConfigValue::Tree(toml_table(table)),
    }
}

fn decode_json(contents: &str, origin: &str) -> Result<ConfigTree, ConfigError> {
    let value: serde_json::Value =
        serde_json::from_str(contents).map_err(|e| malformed(origin, e.to_string()))?;
    match value {
        serde_json::Value::Object(map) => json_object(map, origin),
        other => Err(malformed(
            origin,
            format!("document root must be an object, found {}", json_type(&other)),
        )),
    }
}

fn json_object(
    map: serde_json::Map<String, serde_json::Value>,
    origin: &str,
) -> Result<ConfigTree, ConfigError> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        if let Some(value) = json_value(value, origin)? {
            entries.push((key, value));
        }
    }
    Ok(entries.into_iter().collect())
}

/// Nulls decode to `None`. Integers must fit in `i64`.
fn json_value(value: serde_json::Value, origin: &str) -> Result<Option<ConfigValue>, ConfigError> {
    let value = match value {
        serde_json::Value::Null => return Ok(None),
        serde_json::Value::Bool(b) => ConfigValue::Boolean(b),
        serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => ConfigValue::Integer(i),
            (None, Some(f)) if n.is_f64() => ConfigValue::Float(f),
            _ => {
                return Err(malformed(
                    origin,
                    format!("integer {n} is out of range for a 64-bit signed integer"),
                ));
            }
        },
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                if let Some(item) = json_value(item, origin)? {
                    list.push(item);
                }
            }
            ConfigValue::List(list)
        }
        serde_json::Value::Object(map) => ConfigValue::Tree(json_object(map, origin)?),
    };
    Ok(Some(value))
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
