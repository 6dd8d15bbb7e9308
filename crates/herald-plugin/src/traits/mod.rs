//! Plugin traits.

pub mod notifier;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Hook;

/// Base trait for all plugins.
pub trait Plugin: Send + Sync {
    /// Returns the plugin name.
    fn name(&self) -> &'static str;

    /// Returns the plugin version.
    fn version(&self) -> &'static str;

    /// Returns a short description of the plugin.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the plugin author.
    fn author(&self) -> &'static str {
        ""
    }
}

/// Plugin metadata reported to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name.
    pub name: String,
    /// Plugin version.
    pub version: String,
    /// Short description.
    pub description: String,
    /// Plugin author.
    pub author: String,
    /// Hooks the plugin reacts to.
    pub hooks: Vec<Hook>,
    /// JSON schema of the plugin configuration.
    pub config_schema: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinimalPlugin;

    impl Plugin for MinimalPlugin {
        fn name(&self) -> &'static str {
            "minimal"
        }
        fn version(&self) -> &'static str {
            "1.0.0"
        }
    }

    struct CustomPlugin;

    impl Plugin for CustomPlugin {
        fn name(&self) -> &'static str {
            "custom"
        }
        fn version(&self) -> &'static str {
            "2.0.0"
        }
        fn description(&self) -> &'static str {
            "Custom description"
        }
        fn author(&self) -> &'static str {
            "Herald Team"
        }
    }

    #[test]
    fn test_default_description_and_author() {
        let plugin = MinimalPlugin;
        assert_eq!(plugin.description(), "");
        assert_eq!(plugin.author(), "");
    }

    #[test]
    fn test_custom_description_and_author() {
        let plugin = CustomPlugin;
        assert_eq!(plugin.description(), "Custom description");
        assert_eq!(plugin.author(), "Herald Team");
    }

    #[test]
    fn test_plugin_info_serializes_hooks_by_name() {
        let info = PluginInfo {
            name: "minimal".to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            author: String::new(),
            hooks: vec![Hook::PostPublish, Hook::OnError],
            config_schema: Value::Null,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["hooks"][0], "post-publish");
        assert_eq!(json["hooks"][1], "on-error");
    }
}
