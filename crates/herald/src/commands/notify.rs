//! Notify command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use herald_notifier_telegram::DEFAULT_API_URL;
use herald_plugin::{ExecuteRequest, ExecuteResponse, Hook, Plugin, ReleaseContext};

use super::{create_notifier, execute, load_plugin_config};

/// Arguments for the notify command.
#[derive(Debug, Args)]
pub struct NotifyArgs {
    /// Hook to run (post-publish, on-success, on-error)
    #[arg(long)]
    pub hook: String,

    /// Read the release event from a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub event: Option<PathBuf>,

    /// Released version
    #[arg(long, value_name = "VERSION")]
    pub release_version: Option<String>,

    /// Release tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Release branch
    #[arg(long)]
    pub branch: Option<String>,

    /// Release type (major, minor, patch)
    #[arg(long)]
    pub release_type: Option<String>,

    /// Release notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Configuration file (defaults to the nearest herald.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Format the message without sending it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Give up on delivery after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,

    /// Bot API server
    #[arg(long, env = "HERALD_TELEGRAM_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

/// Runs the notify command.
pub fn run(args: &NotifyArgs) -> Result<()> {
    let notifier = create_notifier(&args.api_url)?;
    let config = load_plugin_config(args.config.as_deref(), notifier.name())?;
    let context = release_context(args)?;

    let request = ExecuteRequest::new(Hook::from(args.hook.as_str()), context)
        .with_config(config)
        .dry_run(args.dry_run);

    let response = execute(&notifier, &request, args.timeout.map(Duration::from_secs))?;

    if args.json {
        println!("{}", response.to_json().context("failed to encode response")?);
    } else {
        print_response(&response);
    }

    if !response.success {
        bail!(
            "{}",
            response.error.as_deref().unwrap_or("notification failed")
        );
    }

    Ok(())
}

/// Builds the release event from the event file, then the flags.
fn release_context(args: &NotifyArgs) -> Result<ReleaseContext> {
    let mut context = match &args.event {
        Some(path) => read_event(path)?,
        None => ReleaseContext::default(),
    };

    if let Some(version) = &args.release_version {
        context.version.clone_from(version);
    }
    if let Some(tag) = &args.tag {
        context.tag_name.clone_from(tag);
    }
    if let Some(branch) = &args.branch {
        context.branch.clone_from(branch);
    }
    if let Some(release_type) = &args.release_type {
        context.release_type.clone_from(release_type);
    }
    if let Some(notes) = &args.notes {
        context.release_notes.clone_from(notes);
    }

    Ok(context)
}

fn read_event(path: &Path) -> Result<ReleaseContext> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read event file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid event file {}", path.display()))
}

fn print_response(response: &ExecuteResponse) {
    if let Some(message) = &response.message {
        println!("{message}");
    }
    for (key, value) in &response.outputs {
        match value.as_str() {
            Some(text) => println!("  {key}: {text}"),
            None => println!("  {key}: {value}"),
        }
    }
}
