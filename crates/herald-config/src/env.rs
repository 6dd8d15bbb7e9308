//! Environment lookup capability.

use std::collections::HashMap;

/// Source of environment variables consulted as configuration fallbacks.
pub trait EnvLookup: Send + Sync {
    /// Returns the value of the variable, if set.
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
