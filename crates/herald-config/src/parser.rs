//! Typed lookups over a dynamic configuration mapping.

use serde_json::{Map, Value};

use crate::EnvLookup;

/// Raw plugin configuration as supplied by the host.
pub type ConfigMap = Map<String, Value>;

/// Reads typed values out of a [`ConfigMap`].
///
/// String lookups may fall back to an environment variable when the key is
/// absent or empty; every lookup falls back to a default otherwise.
pub struct ConfigParser<'a> {
    raw: &'a ConfigMap,
    env: &'a dyn EnvLookup,
}

impl<'a> ConfigParser<'a> {
    /// Creates a parser over the given mapping.
    #[must_use]
    pub fn new(raw: &'a ConfigMap, env: &'a dyn EnvLookup) -> Self {
        Self { raw, env }
    }

    /// Returns a string value.
    ///
    /// Resolution order: non-empty config value, then the non-empty
    /// environment variable `env_key` (skipped when `env_key` is empty),
    /// then `default`.
    #[must_use]
    pub fn get_string(&self, key: &str, env_key: &str, default: &str) -> String {
        if let Some(Value::String(value)) = self.raw.get(key)
            && !value.is_empty()
        {
            return value.clone();
        }

        if !env_key.is_empty()
            && let Some(value) = self.env.var(env_key).filter(|v| !v.is_empty())
        {
            return value;
        }

        default.to_string()
    }

    /// Returns a string value exactly as configured, even when empty.
    ///
    /// Used for enumerations where the empty string is a meaningful choice.
    #[must_use]
    pub fn get_raw_string(&self, key: &str, default: &str) -> String {
        match self.raw.get(key) {
            Some(Value::String(value)) => value.clone(),
            _ => default.to_string(),
        }
    }

    /// Returns a boolean value.
    ///
    /// Accepts JSON booleans and the strings `"true"` / `"false"`.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.raw.get(key) {
            Some(Value::Bool(value)) => *value,
            Some(Value::String(value)) => value.parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Returns an integer value, if one is configured.
    ///
    /// Accepts integers, floats (truncated toward zero) and numeric strings.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_optional_int(&self, key: &str) -> Option<i64> {
        match self.raw.get(key)? {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().map(|f| f as i64)),
            Value::String(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns an integer value or `default`.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_optional_int(key).unwrap_or(default)
    }
}
