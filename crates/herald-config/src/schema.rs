//! Configuration file schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ConfigError, ConfigMap, ConfigResult};

/// Contents of a `herald.toml` file.
///
/// ```toml
/// [plugins.telegram]
/// chat_id = "@releases"
/// parse_mode = "HTML"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-plugin configuration tables, keyed by plugin name.
    #[serde(default)]
    pub plugins: BTreeMap<String, toml::Table>,
}

impl Config {
    /// Returns the configuration mapping for the named plugin.
    ///
    /// A missing table yields an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be represented as JSON.
    pub fn plugin_config(&self, name: &str) -> ConfigResult<ConfigMap> {
        let Some(table) = self.plugins.get(name) else {
            return Ok(ConfigMap::new());
        };

        match serde_json::to_value(table) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(ConfigError::Invalid(format!(
                "plugins.{name} must be a table"
            ))),
            Err(e) => Err(ConfigError::Invalid(format!("plugins.{name}: {e}"))),
        }
    }
}
