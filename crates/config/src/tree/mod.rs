//! Immutable, path-addressable configuration trees.
//!
//! Responsibilities:
//! - Store configuration as nested, ordered key/value maps.
//! - Resolve dotted paths (`a.b.c`) and provide typed accessors.
//! - Produce merged and overridden copies (see `merge.rs`).
//!
//! Does NOT handle:
//! - Decoding markup into trees (see `format.rs`).
//! - Deciding which layers to merge (see `resolver`).
//!
//! Invariants:
//! - Trees are never mutated once built; merge and override return new trees.
//! - Keys iterate in sorted order, so rendering and comparison are deterministic.

mod error;
mod merge;
mod value;

use serde::Serialize;
use std::collections::BTreeMap;

pub use error::TreeError;
pub use value::ConfigValue;

/// A hierarchical mapping from keys to [`ConfigValue`]s.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigTree {
    entries: BTreeMap<String, ConfigValue>,
}

/// Split a dotted path into its segments, rejecting empty segments.
pub(crate) fn split_path(path: &str) -> Result<Vec<&str>, TreeError> {
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(TreeError::BadPath {
            path: path.to_string(),
        });
    }
    Ok(path.split('.').collect())
}

impl ConfigTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the value at `path`, or `None` if absent or the path is invalid.
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        self.lookup(path).ok()
    }

    pub fn has_path(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn get_string(&self, path: &str) -> Result<&str, TreeError> {
        let value = self.lookup(path)?;
        value
            .as_str()
            .ok_or_else(|| wrong_type(path, "string", value))
    }

    pub fn get_string_list(&self, path: &str) -> Result<Vec<String>, TreeError> {
        let value = self.lookup(path)?;
        value
            .as_string_list()
            .ok_or_else(|| wrong_type(path, "list of strings", value))
    }

    pub fn get_tree(&self, path: &str) -> Result<&ConfigTree, TreeError> {
        let value = self.lookup(path)?;
        value
            .as_tree()
            .ok_or_else(|| wrong_type(path, "object", value))
    }

    pub fn get_i64(&self, path: &str) -> Result<i64, TreeError> {
        match self.lookup(path)? {
            ConfigValue::Integer(n) => Ok(*n),
            other => Err(wrong_type(path, "integer", other)),
        }
    }

    /// Integers are widened, matching how numbers are read back from markup.
    pub fn get_f64(&self, path: &str) -> Result<f64, TreeError> {
        match self.lookup(path)? {
            ConfigValue::Float(n) => Ok(*n),
            ConfigValue::Integer(n) => Ok(*n as f64),
            other => Err(wrong_type(path, "number", other)),
        }
    }

    pub fn get_bool(&self, path: &str) -> Result<bool, TreeError> {
        match self.lookup(path)? {
            ConfigValue::Boolean(b) => Ok(*b),
            other => Err(wrong_type(path, "boolean", other)),
        }
    }

    fn lookup(&self, path: &str) -> Result<&ConfigValue, TreeError> {
        let segments = split_path(path)?;
        let mut current = self;
        let mut walked = 0;

        for (i, segment) in segments.iter().enumerate() {
            let value = current
                .entries
                .get(*segment)
                .ok_or_else(|| TreeError::Missing {
                    path: path.to_string(),
                })?;

            if i + 1 == segments.len() {
                return Ok(value);
            }

            walked += segment.len() + usize::from(i > 0);
            current = match value {
                ConfigValue::Tree(tree) => tree,
                other => return Err(wrong_type(&path[..walked], "object", other)),
            };
        }

        // split_path never yields an empty segment list
        Err(TreeError::BadPath {
            path: path.to_string(),
        })
    }
}

fn wrong_type(path: &str, expected: &'static str, actual: &ConfigValue) -> TreeError {
    TreeError::WrongType {
        path: path.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigTree {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConfigTree {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
