//! The merged result of a resolution.

use serde::{Serialize, Serializer};
use std::ops::Deref;

use crate::tree::ConfigTree;

/// A merged configuration tree with the selected environment stamped in.
///
/// Derefs to [`ConfigTree`] for path-based access.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    tree: ConfigTree,
    environment: String,
}

impl ResolvedConfig {
    pub(crate) fn new(tree: ConfigTree, environment: String) -> Self {
        Self { tree, environment }
    }

    /// The environment this configuration was resolved for.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn into_tree(self) -> ConfigTree {
        self.tree
    }
}

impl Deref for ResolvedConfig {
    type Target = ConfigTree;

    fn deref(&self) -> &ConfigTree {
        &self.tree
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tree.serialize(serializer)
    }
}
