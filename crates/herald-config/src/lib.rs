//! Configuration resolution for Herald.
//!
//! This crate turns loosely typed plugin configuration into typed values:
//! - [`ConfigParser`]: typed lookups over a [`ConfigMap`] with environment fallback
//! - [`EnvLookup`]: the environment capability injected into the parser
//! - [`load_config`] / [`find_and_load_config`]: reads the `herald.toml` file

mod env;
mod error;
mod loader;
mod parser;
mod schema;

pub use env::{EnvLookup, ProcessEnv};
pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_FILE_NAME, find_and_load_config, find_and_load_config_from, load_config};
pub use parser::{ConfigMap, ConfigParser};
pub use schema::Config;
