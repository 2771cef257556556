//! Resolver construction and the resolution pipeline.
//!
//! Invariants / Assumptions:
//! - Builder methods replace one source each; unspecified sources keep their defaults.
//! - Loaders are only read from, so one `Resolver` may serve concurrent callers.

use std::path::PathBuf;

use super::allow_list::{allowed_environments, is_environment_allowed, is_environment_configured};
use super::resolved::ResolvedConfig;
use crate::constants::{
    BASE_RESOURCE, CURRENT_ENVIRONMENT_KEY, DEFAULT_LOCAL_CONFIG_PATH, ENVIRONMENTS_RESOURCE,
    LOCAL_RESOURCE,
};
use crate::environment::EnvironmentSelector;
use crate::error::ConfigError;
use crate::loader::{ConfigLoader, FileLoader, ResourceLoader};
use crate::tree::ConfigTree;

/// Resolves one configuration tree from the base, environment, and local layers.
pub struct Resolver {
    selector: EnvironmentSelector,
    local: Box<dyn ConfigLoader>,
    fallback_local: Box<dyn ConfigLoader>,
    environments: Box<dyn ConfigLoader>,
    base: Box<dyn ConfigLoader>,
}

impl Resolver {
    /// Create a resolver with the default sources.
    ///
    /// - local: the file at `/etc/local.conf`, falling back to the `local` resource
    /// - environment table: the `environments` resource
    /// - base: the `base` resource
    pub fn new(selector: EnvironmentSelector) -> Self {
        Self {
            selector,
            local: Box::new(FileLoader::new(DEFAULT_LOCAL_CONFIG_PATH)),
            fallback_local: Box::new(ResourceLoader::new(LOCAL_RESOURCE)),
            environments: Box::new(ResourceLoader::new(ENVIRONMENTS_RESOURCE)),
            base: Box::new(ResourceLoader::new(BASE_RESOURCE)),
        }
    }

    /// Look up the `local`, `environments`, and `base` resources under `dir`.
    ///
    /// This replaces the fallback-local, environment, and base loaders,
    /// including any set earlier with the `with_*_loader` methods.
    pub fn with_resource_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.fallback_local = Box::new(ResourceLoader::in_dir(&dir, LOCAL_RESOURCE));
        self.environments = Box::new(ResourceLoader::in_dir(&dir, ENVIRONMENTS_RESOURCE));
        self.base = Box::new(ResourceLoader::in_dir(&dir, BASE_RESOURCE));
        self
    }

    /// Set the primary source of the local configuration.
    pub fn with_local_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.local = Box::new(loader);
        self
    }

    /// Set the source read when the primary local source does not exist.
    pub fn with_fallback_local_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.fallback_local = Box::new(loader);
        self
    }

    /// Set the source of the per-environment table.
    pub fn with_environment_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.environments = Box::new(loader);
        self
    }

    /// Set the source of the base configuration.
    pub fn with_base_loader(mut self, loader: impl ConfigLoader + 'static) -> Self {
        self.base = Box::new(loader);
        self
    }

    pub fn selector(&self) -> &EnvironmentSelector {
        &self.selector
    }

    /// Resolve the merged configuration for the selected environment.
    ///
    /// # Errors
    ///
    /// Fails on the first problem, in this order:
    /// - the selection variable is unset (`MissingEnvironmentVar`)
    /// - the local configuration cannot be loaded
    /// - the allow-list is missing, mistyped, or does not contain the selection
    /// - the environment table cannot be loaded or has no entry for the selection
    /// - the base configuration cannot be loaded
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let selected = self.selected_environment()?;
        let local = self.load_local()?;

        let allowed = allowed_environments(&local)?;
        if !is_environment_allowed(&selected, &allowed) {
            return Err(ConfigError::EnvironmentNotAllowed { selected, allowed });
        }

        let table = self.load_environments()?;
        if !is_environment_configured(&selected, &table) {
            return Err(ConfigError::EnvironmentNotConfigured { selected });
        }
        let environment = table.get_tree(&selected).map_err(|_| {
            ConfigError::EnvironmentNotConfigured {
                selected: selected.clone(),
            }
        })?;

        let base = self.load_base()?;

        // Lower layers lose: base < environment < local < stamped selection.
        let merged = local
            .with_value(CURRENT_ENVIRONMENT_KEY, selected.as_str())?
            .with_fallback(&environment.with_fallback(&base));

        tracing::debug!(
            environment = %selected,
            keys = merged.len(),
            "Resolved configuration"
        );

        Ok(ResolvedConfig::new(merged, selected))
    }

    /// Read the selected environment name.
    pub fn selected_environment(&self) -> Result<String, ConfigError> {
        self.selector
            .read()
            .ok_or_else(|| ConfigError::MissingEnvironmentVar {
                var: self.selector.var_name().to_string(),
            })
    }

    /// Load the local configuration, falling back only when the primary source does not exist.
    pub fn load_local(&self) -> Result<ConfigTree, ConfigError> {
        match self.local.load() {
            Err(e) if e.is_not_found() => {
                tracing::debug!(
                    primary = %self.local.describe(),
                    fallback = %self.fallback_local.describe(),
                    "Local configuration not found, using fallback"
                );
                self.fallback_local.load()
            }
            result => result,
        }
    }

    /// Load the per-environment table.
    pub fn load_environments(&self) -> Result<ConfigTree, ConfigError> {
        self.environments.load()
    }

    /// Load the base configuration.
    pub fn load_base(&self) -> Result<ConfigTree, ConfigError> {
        self.base.load()
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("selector", &self.selector)
            .field("local", &self.local.describe())
            .field("fallback_local", &self.fallback_local.describe())
            .field("environments", &self.environments.describe())
            .field("base", &self.base.describe())
            .finish()
    }
}
