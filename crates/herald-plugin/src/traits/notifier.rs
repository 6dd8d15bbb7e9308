//! Notifier trait.

use std::future::Future;

use serde_json::Value;
use tokio_util::sync::CancellationToken;

use super::{Plugin, PluginInfo};
use crate::{ConfigMap, ExecuteRequest, ExecuteResponse, Hook, ValidateResponse};

/// A plugin that reports release outcomes to an external destination.
///
/// The host calls [`Notifier::validate`] before a release to surface
/// configuration problems, then [`Notifier::execute`] once per hook.
pub trait Notifier: Plugin {
    /// Returns the hooks this notifier reacts to.
    fn hooks(&self) -> Vec<Hook>;

    /// Returns the JSON schema of the notifier configuration.
    fn config_schema(&self) -> Value;

    /// Returns the plugin metadata.
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: self.name().to_string(),
            version: self.version().to_string(),
            description: self.description().to_string(),
            author: self.author().to_string(),
            hooks: self.hooks(),
            config_schema: self.config_schema(),
        }
    }

    /// Checks a configuration without contacting the destination.
    fn validate(&self, config: &ConfigMap) -> ValidateResponse;

    /// Runs one hook.
    ///
    /// Never fails: every error is reported through the response. The
    /// returned future must stop waiting on the network once `cancel` fires.
    fn execute(
        &self,
        request: &ExecuteRequest,
        cancel: &CancellationToken,
    ) -> impl Future<Output = ExecuteResponse> + Send;
}
