//! Centralized constants for configuration resolution.
//!
//! This module contains the fixed key names, resource names, and default
//! locations shared by the loaders, the resolver, and the CLI.

// =============================================================================
// Well-known Keys
// =============================================================================

/// Key in the local configuration holding the list of selectable environments.
pub const ALLOWED_ENVIRONMENTS_KEY: &str = "allowed-environments";

/// Key stamped into the merged configuration with the selected environment name.
pub const CURRENT_ENVIRONMENT_KEY: &str = "current-environment";

/// Suffix appended to the application prefix to build the environment variable name.
pub const ENVIRONMENT_VAR_SUFFIX: &str = "ENVIRONMENT";

// =============================================================================
// Default Sources
// =============================================================================

/// Default filesystem location of the deployment-local configuration file.
pub const DEFAULT_LOCAL_CONFIG_PATH: &str = "/etc/local.conf";

/// Default directory bundled resources are looked up in.
pub const DEFAULT_RESOURCE_DIR: &str = "resources";

/// Bundled resource used when the local configuration file does not exist.
pub const LOCAL_RESOURCE: &str = "local";

/// Bundled resource holding the per-environment configuration table.
pub const ENVIRONMENTS_RESOURCE: &str = "environments";

/// Bundled resource holding the base configuration.
pub const BASE_RESOURCE: &str = "base";

/// Extensions tried, in order, when a resource name carries no supported extension.
pub const RESOURCE_EXTENSIONS: &[&str] = &["toml", "conf", "json"];
