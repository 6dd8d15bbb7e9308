//! Info command.

use anyhow::{Context, Result};
use clap::Args;
use herald_notifier_telegram::DEFAULT_API_URL;
use herald_plugin::{Hook, Notifier};

use super::create_notifier;

/// Arguments for the info command.
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Print the metadata and configuration schema as JSON
    #[arg(long)]
    pub json: bool,
}

/// Runs the info command.
pub fn run(args: &InfoArgs) -> Result<()> {
    let notifier = create_notifier(DEFAULT_API_URL)?;
    let info = notifier.info();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&info).context("failed to encode plugin info")?
        );
        return Ok(());
    }

    println!("{} v{}", info.name, info.version);
    println!("{}", info.description);
    println!(
        "Hooks: {}",
        info.hooks
            .iter()
            .map(Hook::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );

    println!("Configuration:");
    if let Some(properties) = info.config_schema["properties"].as_object() {
        for (key, property) in properties {
            let description = property["description"].as_str().unwrap_or_default();
            match property.get("default") {
                Some(default) => println!("  {key} (default: {default}): {description}"),
                None => println!("  {key}: {description}"),
            }
        }
    }

    Ok(())
}
