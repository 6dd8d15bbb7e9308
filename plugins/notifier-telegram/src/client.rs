//! Bot API client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{DeliveryError, DeliveryResult};

/// Default Bot API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// Overall request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How long an idle pooled connection is kept.
pub const POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

/// Idle connections kept per host.
pub const POOL_MAX_IDLE_PER_HOST: usize = 5;

/// One `sendMessage` call.
///
/// Optional fields at their default value are left out of the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendMessage {
    /// Target chat.
    pub chat_id: String,

    /// Message body.
    pub text: String,

    /// Bot API parse mode; omitted for plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<String>,

    /// Forum topic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_thread_id: Option<i64>,

    /// Suppress link previews.
    #[serde(skip_serializing_if = "is_false")]
    pub disable_web_page_preview: bool,

    /// Deliver without a sound.
    #[serde(skip_serializing_if = "is_false")]
    pub disable_notification: bool,
}

impl SendMessage {
    /// Creates a plain message for `chat_id`.
    #[must_use]
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            message_thread_id: None,
            disable_web_page_preview: false,
            disable_notification: false,
        }
    }

    #[must_use]
    pub fn with_parse_mode(mut self, parse_mode: Option<&str>) -> Self {
        self.parse_mode = parse_mode.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_thread_id(mut self, thread_id: Option<i64>) -> Self {
        self.message_thread_id = thread_id;
        self
    }

    #[must_use]
    pub fn disable_web_page_preview(mut self, disable: bool) -> Self {
        self.disable_web_page_preview = disable;
        self
    }

    #[must_use]
    pub fn disable_notification(mut self, disable: bool) -> Self {
        self.disable_notification = disable;
        self
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    description: String,
}

/// Reusable Bot API client.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
}

impl TelegramClient {
    /// Creates a client for the public Bot API.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> DeliveryResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .pool_idle_timeout(POOL_IDLE_TIMEOUT)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .build()
            .map_err(|source| DeliveryError::Client { source })?;

        Ok(Self {
            http,
            base_url: DEFAULT_API_URL.to_string(),
        })
    }

    /// Points the client at another Bot API server.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Returns the Bot API server in use.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one message. Makes exactly one request and never retries.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The token or chat is empty
    /// - The request fails or times out
    /// - `cancel` fires before a response arrives
    /// - The response is not a Bot API envelope
    /// - The Bot API answers with `ok: false`
    pub async fn send_message(
        &self,
        token: &str,
        message: &SendMessage,
        cancel: &CancellationToken,
    ) -> DeliveryResult<()> {
        if token.is_empty() {
            return Err(DeliveryError::Missing("bot_token"));
        }
        if message.chat_id.is_empty() {
            return Err(DeliveryError::Missing("chat_id"));
        }

        let url = format!("{}/bot{token}/sendMessage", self.base_url);
        debug!(chat_id = %message.chat_id, "sending message");

        let exchange = async {
            let response = self
                .http
                .post(&url)
                .json(message)
                .send()
                .await
                .map_err(DeliveryError::request)?;
            let status = response.status();
            let envelope: ApiResponse = response.json().await.map_err(DeliveryError::decode)?;
            Ok::<_, DeliveryError>((status, envelope))
        };

        let (status, envelope) = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(DeliveryError::Cancelled),
            result = exchange => result?,
        };

        if envelope.ok {
            debug!(chat_id = %message.chat_id, "message accepted");
            return Ok(());
        }

        Err(DeliveryError::Api {
            code: envelope
                .error_code
                .unwrap_or_else(|| i64::from(status.as_u16())),
            description: envelope.description,
        })
    }
}
