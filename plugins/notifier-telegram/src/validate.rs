//! Pre-flight configuration checks. Never touches the network.

use std::sync::LazyLock;

use herald_config::{ConfigMap, ConfigParser, EnvLookup};
use herald_plugin::{ValidateResponse, ValidationBuilder};
use regex::Regex;

use crate::settings::{BOT_TOKEN_ENV, CHAT_ID_ENV, ParseMode};

static BOT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+:[A-Za-z0-9_-]{35,}$").expect("invalid regex"));

/// Returns true if `token` looks like a @BotFather token.
#[must_use]
pub fn is_valid_bot_token(token: &str) -> bool {
    BOT_TOKEN_RE.is_match(token)
}

/// Validates a raw configuration, consulting `env` for the token and chat.
///
/// The chat identifier is opaque: numeric ids, negative group ids and
/// `@channel` handles are all accepted.
#[must_use]
pub fn validate_config(config: &ConfigMap, env: &dyn EnvLookup) -> ValidateResponse {
    let parser = ConfigParser::new(config, env);
    let mut builder = ValidationBuilder::new();

    let bot_token = parser.get_string("bot_token", BOT_TOKEN_ENV, "");
    if bot_token.is_empty() {
        builder.add_error_with_code(
            "bot_token",
            format!("Telegram bot token is required (set {BOT_TOKEN_ENV} env var or configure bot_token)"),
            "required",
        );
    } else if !is_valid_bot_token(&bot_token) {
        builder.add_error_with_code("bot_token", "invalid bot token format", "format");
    }

    if parser.get_string("chat_id", CHAT_ID_ENV, "").is_empty() {
        builder.add_error_with_code(
            "chat_id",
            format!("Chat ID is required (set {CHAT_ID_ENV} env var or configure chat_id)"),
            "required",
        );
    }

    if ParseMode::parse(&parser.get_raw_string("parse_mode", "MarkdownV2")).is_none() {
        builder.add_error_with_code(
            "parse_mode",
            "Parse mode must be 'MarkdownV2', 'HTML', or empty",
            "enum",
        );
    }

    builder.build()
}
