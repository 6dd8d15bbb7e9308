//! Typed notifier settings.

use std::fmt;

use herald_config::{ConfigMap, ConfigParser, EnvLookup};
use tracing::warn;

/// Environment variable consulted when `bot_token` is not configured.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Environment variable consulted when `chat_id` is not configured.
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Default cap on the release notes excerpt, in characters.
pub const DEFAULT_MAX_CHANGELOG_LENGTH: i64 = 3000;

/// Text dialect of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Telegram `MarkdownV2`, with special characters escaped.
    #[default]
    MarkdownV2,
    /// Telegram HTML, with entities escaped.
    Html,
    /// No markup.
    Plain,
}

impl ParseMode {
    /// Parses a configured parse mode. The empty string means [`ParseMode::Plain`].
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MarkdownV2" => Some(Self::MarkdownV2),
            "HTML" => Some(Self::Html),
            "" => Some(Self::Plain),
            _ => None,
        }
    }

    /// Returns the Bot API `parse_mode` value, if any.
    #[must_use]
    pub fn api_name(self) -> Option<&'static str> {
        match self {
            Self::MarkdownV2 => Some("MarkdownV2"),
            Self::Html => Some("HTML"),
            Self::Plain => None,
        }
    }
}

/// Resolved notifier settings. Built fresh for every invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Bot token from @BotFather.
    pub bot_token: String,
    /// Target chat: numeric id, negative group id or `@channel`.
    pub chat_id: String,
    /// Topic thread in forum groups.
    pub message_thread_id: Option<i64>,
    /// Message dialect.
    pub parse_mode: ParseMode,
    /// Suppress link previews.
    pub disable_web_page_preview: bool,
    /// Deliver success messages silently.
    pub disable_notification: bool,
    /// Notify on successful releases.
    pub notify_on_success: bool,
    /// Notify on failed releases.
    pub notify_on_error: bool,
    /// Append the release notes to success messages.
    pub include_changelog: bool,
    /// Release notes cap in characters; zero or negative means no limit.
    pub max_changelog_length: i64,
    /// Custom success message template.
    pub template: Option<String>,
}

impl Settings {
    /// Resolves settings from raw configuration and the environment.
    ///
    /// An unknown `parse_mode` falls back to [`ParseMode::Plain`];
    /// validation reports it separately.
    #[must_use]
    pub fn resolve(raw: &ConfigMap, env: &dyn EnvLookup) -> Self {
        let parser = ConfigParser::new(raw, env);

        let configured_mode = parser.get_raw_string("parse_mode", "MarkdownV2");
        let parse_mode = ParseMode::parse(&configured_mode).unwrap_or_else(|| {
            warn!(parse_mode = %configured_mode, "unknown parse mode, sending plain text");
            ParseMode::Plain
        });

        let template = parser.get_string("template", "", "");

        Self {
            bot_token: parser.get_string("bot_token", BOT_TOKEN_ENV, ""),
            chat_id: parser.get_string("chat_id", CHAT_ID_ENV, ""),
            message_thread_id: parser
                .get_optional_int("message_thread_id")
                .filter(|id| *id != 0),
            parse_mode,
            disable_web_page_preview: parser.get_bool("disable_web_page_preview", true),
            disable_notification: parser.get_bool("disable_notification", false),
            notify_on_success: parser.get_bool("notify_on_success", true),
            notify_on_error: parser.get_bool("notify_on_error", true),
            include_changelog: parser.get_bool("include_changelog", false),
            max_changelog_length: parser
                .get_int("max_changelog_length", DEFAULT_MAX_CHANGELOG_LENGTH),
            template: (!template.is_empty()).then_some(template),
        }
    }

    /// Returns the release notes cap, or `None` when notes are never cut.
    #[must_use]
    pub fn changelog_limit(&self) -> Option<usize> {
        usize::try_from(self.max_changelog_length)
            .ok()
            .filter(|limit| *limit > 0)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            chat_id: String::new(),
            message_thread_id: None,
            parse_mode: ParseMode::default(),
            disable_web_page_preview: true,
            disable_notification: false,
            notify_on_success: true,
            notify_on_error: true,
            include_changelog: false,
            max_changelog_length: DEFAULT_MAX_CHANGELOG_LENGTH,
            template: None,
        }
    }
}

// Debug output never includes the bot token.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("message_thread_id", &self.message_thread_id)
            .field("parse_mode", &self.parse_mode)
            .field("disable_web_page_preview", &self.disable_web_page_preview)
            .field("disable_notification", &self.disable_notification)
            .field("notify_on_success", &self.notify_on_success)
            .field("notify_on_error", &self.notify_on_error)
            .field("include_changelog", &self.include_changelog)
            .field("max_changelog_length", &self.max_changelog_length)
            .field("template", &self.template)
            .finish()
    }
}
