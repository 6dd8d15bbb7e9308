//! Release lifecycle hooks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The release lifecycle point a host is reporting.
///
/// Hosts may send hooks a notifier does not know about; those are kept as
/// [`Hook::Other`] rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Hook {
    /// The release has been published.
    PostPublish,
    /// The release pipeline finished successfully.
    OnSuccess,
    /// The release pipeline failed.
    OnError,
    /// Any other hook.
    Other(String),
}

impl Hook {
    /// Returns the wire name of the hook.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PostPublish => "post-publish",
            Self::OnSuccess => "on-success",
            Self::OnError => "on-error",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Hook {
    fn from(value: &str) -> Self {
        match value {
            "post-publish" => Self::PostPublish,
            "on-success" => Self::OnSuccess,
            "on-error" => Self::OnError,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Hook {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Hook> for String {
    fn from(hook: Hook) -> Self {
        hook.as_str().to_string()
    }
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
