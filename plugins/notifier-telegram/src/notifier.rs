//! Hook orchestration.

use herald_config::{EnvLookup, ProcessEnv};
use herald_plugin::{
    ConfigMap, ExecuteRequest, ExecuteResponse, Hook, Notifier, Plugin, PluginError,
    PluginResult, ValidateResponse,
};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::{SendMessage, TelegramClient};
use crate::format::{Outcome, format_message};
use crate::schema::config_schema;
use crate::settings::Settings;
use crate::validate::validate_config;

/// Telegram release notifier.
pub struct TelegramNotifier {
    client: TelegramClient,
    env: Box<dyn EnvLookup>,
}

impl TelegramNotifier {
    /// Creates a notifier for the public Bot API reading the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> PluginResult<Self> {
        let client = TelegramClient::new().map_err(|e| PluginError::InitFailed(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Creates a notifier around an existing client.
    #[must_use]
    pub fn with_client(client: TelegramClient) -> Self {
        Self {
            client,
            env: Box::new(ProcessEnv),
        }
    }

    /// Replaces the environment consulted for `TELEGRAM_*` fallbacks.
    #[must_use]
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Resolves the settings for a raw configuration.
    #[must_use]
    pub fn settings(&self, config: &ConfigMap) -> Settings {
        Settings::resolve(config, self.env.as_ref())
    }

    async fn notify(
        &self,
        outcome: Outcome,
        settings: &Settings,
        request: &ExecuteRequest,
        cancel: &CancellationToken,
    ) -> ExecuteResponse {
        let (enabled, label) = match outcome {
            Outcome::Success => (settings.notify_on_success, "success"),
            Outcome::Failure => (settings.notify_on_error, "error"),
        };
        if !enabled {
            return ExecuteResponse::success(match outcome {
                Outcome::Success => "Success notification disabled",
                Outcome::Failure => "Error notification disabled",
            });
        }

        let version = &request.context.version;
        let text = format_message(&request.context, settings, outcome);
        let message = outbound_message(settings, text, outcome);

        if request.dry_run {
            let response =
                ExecuteResponse::success(format!("Would send Telegram {label} notification"))
                    .with_output("chat_id", settings.chat_id.as_str())
                    .with_output("version", version.as_str());
            return match outcome {
                Outcome::Success => {
                    response.with_output("message_length", message.text.chars().count())
                }
                Outcome::Failure => response,
            };
        }

        match self
            .client
            .send_message(&settings.bot_token, &message, cancel)
            .await
        {
            Ok(()) => {
                let response =
                    ExecuteResponse::success(format!("Sent Telegram {label} notification"));
                match outcome {
                    Outcome::Success => response
                        .with_output("chat_id", settings.chat_id.as_str())
                        .with_output("version", version.as_str()),
                    Outcome::Failure => response,
                }
            }
            Err(e) => {
                warn!(chat_id = %settings.chat_id, error = %e, "telegram delivery failed");
                ExecuteResponse::failure(format!("failed to send Telegram message: {e}"))
            }
        }
    }
}

/// Builds the `sendMessage` call for a rendered message.
///
/// Failure notifications are never sent silently.
#[must_use]
pub fn outbound_message(settings: &Settings, text: String, outcome: Outcome) -> SendMessage {
    SendMessage::new(settings.chat_id.as_str(), text)
        .with_parse_mode(settings.parse_mode.api_name())
        .with_thread_id(settings.message_thread_id)
        .disable_web_page_preview(settings.disable_web_page_preview)
        .disable_notification(outcome == Outcome::Success && settings.disable_notification)
}

impl Plugin for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Send Telegram notifications for releases"
    }

    fn author(&self) -> &'static str {
        env!("CARGO_PKG_AUTHORS")
    }
}

impl Notifier for TelegramNotifier {
    fn hooks(&self) -> Vec<Hook> {
        vec![Hook::PostPublish, Hook::OnSuccess, Hook::OnError]
    }

    fn config_schema(&self) -> Value {
        config_schema()
    }

    fn validate(&self, config: &ConfigMap) -> ValidateResponse {
        validate_config(config, self.env.as_ref())
    }

    async fn execute(
        &self,
        request: &ExecuteRequest,
        cancel: &CancellationToken,
    ) -> ExecuteResponse {
        let settings = self.settings(&request.config);
        debug!(hook = %request.hook, dry_run = request.dry_run, ?settings, "executing hook");

        let response = match &request.hook {
            Hook::PostPublish | Hook::OnSuccess => {
                self.notify(Outcome::Success, &settings, request, cancel)
                    .await
            }
            Hook::OnError => {
                self.notify(Outcome::Failure, &settings, request, cancel)
                    .await
            }
            Hook::Other(name) => ExecuteResponse::success(format!("Hook {name} not handled")),
        };

        info!(
            hook = %request.hook,
            dry_run = request.dry_run,
            success = response.success,
            "hook finished"
        );
        response
    }
}
