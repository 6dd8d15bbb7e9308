//! Configuration validation results.

use serde::{Deserialize, Serialize};

/// A single configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The offending configuration key.
    pub field: String,

    /// Human-readable explanation.
    pub message: String,

    /// Machine-readable category (e.g., "required", "format", "enum").
    pub code: String,
}

/// The outcome of validating a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateResponse {
    /// True when no errors were found.
    pub valid: bool,

    /// Every problem found.
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

impl ValidateResponse {
    /// Returns the first error reported for `field`.
    #[must_use]
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Accumulates validation errors.
#[derive(Debug, Default)]
pub struct ValidationBuilder {
    errors: Vec<ValidationError>,
}

impl ValidationBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error with an explicit code.
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(ValidationError {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        });
    }

    /// Returns true if any error was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Builds the response.
    #[must_use]
    pub fn build(self) -> ValidateResponse {
        ValidateResponse {
            valid: self.errors.is_empty(),
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_is_valid() {
        let response = ValidationBuilder::new().build();
        assert!(response.valid);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_has_errors() {
        let mut builder = ValidationBuilder::new();
        assert!(!builder.has_errors());
        builder.add_error_with_code("chat_id", "missing", "required");
        assert!(builder.has_errors());
        assert!(!builder.build().valid);
    }

    #[test]
    fn test_add_error_with_code() {
        let mut builder = ValidationBuilder::new();
        builder.add_error_with_code("bot_token", "missing", "required");
        builder.add_error_with_code("parse_mode", "unknown", "enum");

        let response = builder.build();
        assert_eq!(response.errors.len(), 2);
        assert_eq!(response.error_for("bot_token").unwrap().code, "required");
        assert_eq!(response.error_for("parse_mode").unwrap().code, "enum");
        assert!(response.error_for("chat_id").is_none());
    }
}
