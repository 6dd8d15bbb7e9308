//! Exec command: one JSON request in, one JSON response out.
//!
//! Failed hooks are reported in the response; the exit status is only
//! non-zero when the request itself cannot be read.

use std::io::Read;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use herald_notifier_telegram::DEFAULT_API_URL;
use herald_plugin::ExecuteRequest;

use super::{create_notifier, execute};

/// Arguments for the exec command.
#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Give up on delivery after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Bot API server
    #[arg(long, env = "HERALD_TELEGRAM_API_URL", default_value = DEFAULT_API_URL, hide = true)]
    pub api_url: String,
}

/// Runs the exec command.
pub fn run(args: &ExecArgs) -> Result<()> {
    let mut payload = String::new();
    std::io::stdin()
        .read_to_string(&mut payload)
        .context("failed to read request from stdin")?;

    let request = ExecuteRequest::from_json(&payload).context("invalid request")?;
    let notifier = create_notifier(&args.api_url)?;
    let response = execute(&notifier, &request, args.timeout.map(Duration::from_secs))?;

    println!("{}", response.to_json().context("failed to encode response")?);
    Ok(())
}
