//! Rendering of resolved configuration for stdout.

use anyhow::{Context, Result};
use concord_config::{ConfigTree, ConfigValue};

use crate::args::OutputFormat;

/// Render a whole tree in the requested format.
pub fn render_tree(tree: &ConfigTree, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Toml => toml::to_string(tree).context("Failed to render configuration as TOML"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tree).context("Failed to render configuration as JSON")
        }
    }
}

/// Render one value. Scalars print bare so scripts can consume them directly.
pub fn render_value(value: &ConfigValue, format: OutputFormat) -> Result<String> {
    match (value, format) {
        (ConfigValue::Tree(tree), _) => render_tree(tree, format),
        (ConfigValue::List(_), OutputFormat::Toml) => Ok(toml::Value::try_from(value)
            .context("Failed to render value as TOML")?
            .to_string()),
        (ConfigValue::List(_), OutputFormat::Json) => {
            serde_json::to_string_pretty(value).context("Failed to render value as JSON")
        }
        (scalar, _) => Ok(scalar.to_string()),
    }
}
