//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Send release notifications to Telegram.
#[derive(Debug, Parser)]
#[command(name = "herald")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a release hook and send the notification
    Notify(commands::notify::NotifyArgs),

    /// Check the notifier configuration without sending anything
    Validate(commands::validate::ValidateArgs),

    /// Show notifier metadata and configuration schema
    Info(commands::info::InfoArgs),

    /// Run one JSON request from stdin and write the JSON response to stdout
    Exec(commands::exec::ExecArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Notify(args) => commands::notify::run(&args),
            Commands::Validate(args) => commands::validate::run(&args),
            Commands::Info(args) => commands::info::run(&args),
            Commands::Exec(args) => commands::exec::run(&args),
        }
    }
}
