//! Allow-list extraction and environment membership checks.

use crate::constants::ALLOWED_ENVIRONMENTS_KEY;
use crate::error::ConfigError;
use crate::tree::{ConfigTree, TreeError};

/// Reads the allow-list from the local configuration.
///
/// A missing key yields [`ConfigError::NoAllowedEnvironments`]; anything
/// other than a list of strings yields [`ConfigError::AllowedEnvironmentsNotList`]
/// with the offending value rendered in the message.
pub fn allowed_environments(local: &ConfigTree) -> Result<Vec<String>, ConfigError> {
    match local.get_string_list(ALLOWED_ENVIRONMENTS_KEY) {
        Ok(allowed) => Ok(allowed),
        Err(TreeError::Missing { .. }) => Err(ConfigError::NoAllowedEnvironments {
            key: ALLOWED_ENVIRONMENTS_KEY.to_string(),
        }),
        Err(_) => Err(ConfigError::AllowedEnvironmentsNotList {
            value: local
                .get(ALLOWED_ENVIRONMENTS_KEY)
                .map(ToString::to_string)
                .unwrap_or_default(),
        }),
    }
}

/// True iff `selected` is exactly (case-sensitively) one of `allowed`.
pub fn is_environment_allowed(selected: &str, allowed: &[String]) -> bool {
    allowed.iter().any(|env| env == selected)
}

/// True iff the environment table has an entry at `selected`.
pub fn is_environment_configured(selected: &str, table: &ConfigTree) -> bool {
    table.has_path(selected)
}
