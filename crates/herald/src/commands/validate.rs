//! Validate command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use herald_notifier_telegram::DEFAULT_API_URL;
use herald_plugin::{Notifier, Plugin};

use super::{create_notifier, load_plugin_config};

/// Arguments for the validate command.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file (defaults to the nearest herald.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the validate command.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let notifier = create_notifier(DEFAULT_API_URL)?;
    let config = load_plugin_config(args.config.as_deref(), notifier.name())?;
    let response = notifier.validate(&config);

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&response).context("failed to encode result")?
        );
    } else if response.valid {
        println!("Configuration is valid");
    } else {
        for error in &response.errors {
            println!("{}: {} [{}]", error.field, error.message, error.code);
        }
    }

    if !response.valid {
        bail!(
            "configuration is invalid ({} error{})",
            response.errors.len(),
            if response.errors.len() == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
