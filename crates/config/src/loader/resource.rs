//! Bundled-resource configuration loader.
//!
//! Resources are files under a resource root directory, addressed by name
//! without extension. A name may contain `/` to address subdirectories.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigLoader;
use crate::constants::{DEFAULT_RESOURCE_DIR, RESOURCE_EXTENSIONS};
use crate::error::ConfigError;
use crate::format::Format;
use crate::tree::ConfigTree;

/// Loads configuration from a named resource bundled with the application.
///
/// An absent resource and a resource with no entries both surface as
/// [`ConfigError::MissingResource`]; a resource that fails to decode is
/// [`ConfigError::Malformed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLoader {
    root: PathBuf,
    name: String,
}

impl ResourceLoader {
    /// Resource `name` under the default resource directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self::in_dir(DEFAULT_RESOURCE_DIR, name)
    }

    /// Resource `name` under `root`.
    pub fn in_dir(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Finds the file backing this resource.
    ///
    /// A name with a supported extension is used as-is; otherwise each
    /// extension in [`RESOURCE_EXTENSIONS`] is tried in order.
    fn locate(&self) -> Option<PathBuf> {
        let direct = self.root.join(&self.name);
        let has_known_extension = direct
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(Format::is_supported_extension);
        if has_known_extension {
            return direct.is_file().then_some(direct);
        }

        RESOURCE_EXTENSIONS
            .iter()
            .map(|ext| self.root.join(format!("{}.{}", self.name, ext)))
            .find(|candidate| candidate.is_file())
    }

    fn missing(&self) -> ConfigError {
        ConfigError::MissingResource {
            name: self.name.clone(),
            root: self.root.clone(),
        }
    }
}

impl ConfigLoader for ResourceLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        let path = self.locate().ok_or_else(|| self.missing())?;

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(self.missing()),
            Err(source) => return Err(ConfigError::ConfigFileRead { path, source }),
        };

        let tree = Format::from_path(&path).decode(&contents, &path.display().to_string())?;
        if tree.is_empty() {
            return Err(self.missing());
        }

        tracing::debug!(
            resource = %self.name,
            path = %path.display(),
            keys = tree.len(),
            "Loaded bundled configuration resource"
        );

        Ok(tree)
    }

    fn describe(&self) -> String {
        format!("resource {} in {}", self.name, self.root.display())
    }
}
