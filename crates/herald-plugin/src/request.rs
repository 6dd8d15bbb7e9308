//! Hook invocation envelopes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{ConfigMap, Hook, PluginResult, ReleaseContext};

/// A single hook invocation sent by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteRequest {
    /// The hook being run.
    pub hook: Hook,

    /// Raw plugin configuration.
    #[serde(default)]
    pub config: ConfigMap,

    /// The release being reported.
    #[serde(default)]
    pub context: ReleaseContext,

    /// Whether side effects must be skipped.
    #[serde(default)]
    pub dry_run: bool,
}

impl ExecuteRequest {
    /// Creates a request with an empty configuration.
    #[must_use]
    pub fn new(hook: Hook, context: ReleaseContext) -> Self {
        Self {
            hook,
            config: ConfigMap::new(),
            context,
            dry_run: false,
        }
    }

    /// Sets the plugin configuration.
    #[must_use]
    pub fn with_config(mut self, config: ConfigMap) -> Self {
        self.config = config;
        self
    }

    /// Sets the dry run flag.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Parses a request from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a valid request.
    pub fn from_json(payload: &str) -> PluginResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// The result of a hook invocation.
///
/// Failures are reported as data: `success` is false and `error` explains why.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecuteResponse {
    /// Whether the hook succeeded.
    pub success: bool,

    /// Human-readable outcome on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Human-readable cause on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Values exposed to the host for inspection.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub outputs: Map<String, Value>,
}

impl ExecuteResponse {
    /// Creates a successful response.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Creates a failed response.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Adds an output value.
    #[must_use]
    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.outputs.insert(key.into(), value.into());
        self
    }

    /// Gets an output value.
    #[must_use]
    pub fn output(&self, key: &str) -> Option<&Value> {
        self.outputs.get(key)
    }

    /// Serializes the response to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if an output value cannot be serialized.
    pub fn to_json(&self) -> PluginResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
