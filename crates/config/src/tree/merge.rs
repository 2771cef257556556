//! Merge and override operations on configuration trees.
//!
//! Merge semantics for `receiver.with_fallback(fallback)`:
//! - Trees on both sides: deep-merge by key (recursive)
//! - Lists: the receiver's list replaces the fallback's entirely
//! - Scalars: the receiver wins
//! - Leaf against tree: the receiver's value wins wholesale, never merged

use super::{ConfigTree, ConfigValue, TreeError, split_path};

impl ConfigTree {
    /// Returns a new tree where `self` takes precedence over `fallback` at every path.
    pub fn with_fallback(&self, fallback: &ConfigTree) -> ConfigTree {
        let mut entries = fallback.entries.clone();
        for (key, value) in &self.entries {
            let merged = match (value, fallback.entries.get(key)) {
                (ConfigValue::Tree(ours), Some(ConfigValue::Tree(theirs))) => {
                    ConfigValue::Tree(ours.with_fallback(theirs))
                }
                _ => value.clone(),
            };
            entries.insert(key.clone(), merged);
        }
        ConfigTree { entries }
    }

    /// Returns a new tree with `value` set at `path`.
    ///
    /// Missing intermediate trees are created; a leaf standing on the path is replaced.
    pub fn with_value(
        &self,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> Result<ConfigTree, TreeError> {
        let segments = split_path(path)?;
        Ok(self.with_segments(&segments, value.into()))
    }

    fn with_segments(&self, segments: &[&str], value: ConfigValue) -> ConfigTree {
        let mut entries = self.entries.clone();
        match segments {
            [] => {}
            [last] => {
                entries.insert((*last).to_string(), value);
            }
            [head, rest @ ..] => {
                let child = match self.entries.get(*head) {
                    Some(ConfigValue::Tree(tree)) => tree.with_segments(rest, value),
                    _ => ConfigTree::new().with_segments(rest, value),
                };
                entries.insert((*head).to_string(), ConfigValue::Tree(child));
            }
        }
        ConfigTree { entries }
    }
}
