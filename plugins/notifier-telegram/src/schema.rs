//! Declarative configuration schema reported to hosts.

use serde_json::{Value, json};

use crate::settings::DEFAULT_MAX_CHANGELOG_LENGTH;

/// Returns the JSON schema of the `[plugins.telegram]` table.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "bot_token": {
                "type": "string",
                "description": "Telegram bot token from @BotFather (or TELEGRAM_BOT_TOKEN env var)"
            },
            "chat_id": {
                "type": "string",
                "description": "Chat ID (user, group, or channel). Use @channel_name for public channels (or TELEGRAM_CHAT_ID env var)"
            },
            "message_thread_id": {
                "type": "integer",
                "description": "Thread ID for forum/topic groups"
            },
            "parse_mode": {
                "type": "string",
                "enum": ["MarkdownV2", "HTML", ""],
                "default": "MarkdownV2",
                "description": "Message parsing mode"
            },
            "disable_web_page_preview": {
                "type": "boolean",
                "default": true,
                "description": "Disable link previews"
            },
            "disable_notification": {
                "type": "boolean",
                "default": false,
                "description": "Send success messages silently"
            },
            "notify_on_success": {
                "type": "boolean",
                "default": true,
                "description": "Send notification on successful release"
            },
            "notify_on_error": {
                "type": "boolean",
                "default": true,
                "description": "Send notification on failed release"
            },
            "include_changelog": {
                "type": "boolean",
                "default": false,
                "description": "Include release notes in the message"
            },
            "max_changelog_length": {
                "type": "integer",
                "default": DEFAULT_MAX_CHANGELOG_LENGTH,
                "description": "Maximum release notes length in characters (0 for no limit)"
            },
            "template": {
                "type": "string",
                "description": "Custom success message template ({{version}}, {{tag}}, {{branch}}, {{release_type}}, {{release_notes}}, {{date}})"
            }
        },
        "required": ["chat_id"]
    })
}
