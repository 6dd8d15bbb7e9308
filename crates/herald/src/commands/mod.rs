//! CLI commands.

pub mod exec;
pub mod info;
pub mod notify;
pub mod validate;

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use herald_config::{Config, ConfigMap, find_and_load_config, load_config};
use herald_notifier_telegram::{DEFAULT_API_URL, TelegramClient, TelegramNotifier};
use herald_plugin::{ExecuteRequest, ExecuteResponse, Notifier, Plugin};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Loads the notifier table from `path`, or from the nearest `herald.toml`.
///
/// A missing file only counts as an error when `path` is given.
pub fn load_plugin_config(path: Option<&Path>, plugin: &str) -> Result<ConfigMap> {
    let config = match path {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => match find_and_load_config() {
            Ok(config) => config,
            Err(e) if e.is_not_found() => {
                debug!("no configuration file found, using defaults");
                Config::default()
            }
            Err(e) => return Err(e).context("failed to load configuration"),
        },
    };

    config
        .plugin_config(plugin)
        .with_context(|| format!("invalid [plugins.{plugin}] configuration"))
}

/// Creates the notifier for the given Bot API server.
pub fn create_notifier(api_url: &str) -> Result<TelegramNotifier> {
    if api_url == DEFAULT_API_URL {
        return TelegramNotifier::new().context("failed to initialize notifier");
    }

    let client = TelegramClient::new()
        .context("failed to build HTTP client")?
        .with_base_url(api_url);
    Ok(TelegramNotifier::with_client(client))
}

/// Runs one hook to completion.
///
/// Ctrl+C, or the optional `timeout`, cancels the pending delivery.
pub fn execute(
    notifier: &TelegramNotifier,
    request: &ExecuteRequest,
    timeout: Option<Duration>,
) -> Result<ExecuteResponse> {
    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;

    rt.block_on(async {
        let cancel = CancellationToken::new();

        let on_signal = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling delivery");
                on_signal.cancel();
            }
        });

        if let Some(timeout) = timeout {
            let on_timeout = cancel.clone();
            tokio::spawn(async move {
                tokio::time::sleep(timeout).await;
                warn!(?timeout, "deadline reached, cancelling delivery");
                on_timeout.cancel();
            });
        }

        debug!(plugin = notifier.name(), hook = %request.hook, "running hook");
        Ok(notifier.execute(request, &cancel).await)
    })
}
