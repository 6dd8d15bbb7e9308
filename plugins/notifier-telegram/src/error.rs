//! Error types for message delivery.

/// Result type for delivery operations.
pub type DeliveryResult<T> = Result<T, DeliveryError>;

/// Delivery error types.
///
/// Wrapped transport errors never carry the request URL, which contains
/// the bot token.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent or no response was received.
    #[error("failed to send request: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not a Bot API envelope.
    #[error("failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },

    /// The Bot API rejected the message.
    #[error("telegram API error ({code}): {description}")]
    Api { code: i64, description: String },

    /// The caller cancelled the request before a response arrived.
    #[error("request cancelled")]
    Cancelled,

    /// A required field was empty at send time.
    #[error("{0} is required")]
    Missing(&'static str),
}

impl DeliveryError {
    /// Returns true if the Bot API received and refused the message.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    pub(crate) fn request(source: reqwest::Error) -> Self {
        Self::Request {
            source: source.without_url(),
        }
    }

    pub(crate) fn decode(source: reqwest::Error) -> Self {
        Self::Decode {
            source: source.without_url(),
        }
    }
}
