//! Plugin contract for Herald.
//!
//! This crate provides the types exchanged between a host and a notifier:
//! - [`Hook`]: the release lifecycle point being reported
//! - [`ReleaseContext`]: the release event supplied by the host
//! - [`ExecuteRequest`] / [`ExecuteResponse`]: one hook invocation
//! - [`ValidateResponse`]: pre-flight configuration errors
//! - [`Plugin`] / [`Notifier`]: the traits a notifier implements

mod context;
mod error;
mod hook;
mod request;
mod traits;
mod validation;

pub use context::{CategorizedChanges, ConventionalCommit, ReleaseContext};
pub use error::{PluginError, PluginResult};
pub use hook::Hook;
pub use herald_config::ConfigMap;
pub use request::{ExecuteRequest, ExecuteResponse};
pub use traits::notifier::Notifier;
pub use traits::{Plugin, PluginInfo};
pub use validation::{ValidateResponse, ValidationBuilder, ValidationError};
