//! Filesystem-path configuration loader.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigLoader;
use crate::error::ConfigError;
use crate::format::Format;
use crate::tree::ConfigTree;

/// Loads configuration from a file at a fixed path.
///
/// The markup is chosen from the extension (see [`Format::from_path`]). An
/// existing but empty file yields an empty tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigLoader for FileLoader {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound {
                    path: self.path.clone(),
                });
            }
            Err(source) => {
                return Err(ConfigError::ConfigFileRead {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tree = Format::from_path(&self.path)
            .decode(&contents, &self.path.display().to_string())?;

        tracing::debug!(
            path = %self.path.display(),
            keys = tree.len(),
            "Loaded configuration file"
        );

        Ok(tree)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
