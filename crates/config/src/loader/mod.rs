//! Configuration sources.
//!
//! Responsibilities:
//! - Define the `ConfigLoader` capability: produce one raw `ConfigTree` from one source.
//! - Provide the bundled-resource and filesystem-path strategies.
//!
//! Does NOT handle:
//! - Choosing between sources or falling back (see `resolver`).
//! - Markup decoding details (see `format.rs`).
//!
//! Invariants:
//! - Loaders hold only their construction parameters; every `load()` reads afresh.
//! - An absent filesystem path is `ConfigError::FileNotFound`, never a decode error.
//! - An absent or empty bundled resource is `ConfigError::MissingResource`.

mod file;
mod resource;

use crate::error::ConfigError;
use crate::tree::ConfigTree;

pub use file::FileLoader;
pub use resource::ResourceLoader;

/// Loads a raw configuration tree from one underlying source.
pub trait ConfigLoader: Send + Sync {
    fn load(&self) -> Result<ConfigTree, ConfigError>;

    /// Short description of the source, used in log fields.
    fn describe(&self) -> String;
}

impl<L: ConfigLoader + ?Sized> ConfigLoader for Box<L> {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<L: ConfigLoader + ?Sized> ConfigLoader for std::sync::Arc<L> {
    fn load(&self) -> Result<ConfigTree, ConfigError> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
