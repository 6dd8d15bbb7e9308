//! Telegram release notifications for Herald.
//!
//! [`TelegramNotifier`] turns a release event into one Bot API
//! `sendMessage` call:
//!
//! - [`Settings`] resolves the raw configuration with `TELEGRAM_*`
//!   environment fallbacks
//! - [`format`] renders the message in the configured [`ParseMode`]
//! - [`TelegramClient`] delivers it, exactly once
//! - [`validate_config`] checks a configuration without any network call
//!
//! # Configuration
//!
//! ```toml
//! [plugins.telegram]
//! chat_id = "@releases"
//! parse_mode = "HTML"
//! include_changelog = true
//! ```

mod client;
mod error;
pub mod format;
mod notifier;
mod schema;
mod settings;
mod validate;

pub use client::{DEFAULT_API_URL, SendMessage, TelegramClient};
pub use error::{DeliveryError, DeliveryResult};
pub use format::{Outcome, format_message};
pub use notifier::{TelegramNotifier, outbound_message};
pub use schema::config_schema;
pub use settings::{BOT_TOKEN_ENV, CHAT_ID_ENV, ParseMode, Settings};
pub use validate::{is_valid_bot_token, validate_config};
