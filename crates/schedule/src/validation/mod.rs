//! Quartz CRON validation with structured errors.
//!
//! The simple translator never rejects input; this module is what decides
//! whether an expression is a usable schedule. Errors block saving, warnings
//! are advisory. Paths are `cron` for whole-expression problems and
//! `cron.<field>` (e.g. `cron.day_of_week`) for a single field.

mod field_checks;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::fields::CronFields;

// ── Result types ────────────────────────────────────────────────────

/// Overall validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// A blocking validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// `cron` or `cron.<field>`.
    pub path: String,
    pub message: String,
}

/// A non-blocking advisory warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationResult {
    pub(crate) fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(ValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    pub(crate) fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            path: path.into(),
            message: message.into(),
        });
    }

    /// Whether any error was reported at `path`.
    pub fn has_error_at(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

// ── Public API ──────────────────────────────────────────────────────

/// Validate a 6- or 7-field Quartz expression.
pub fn validate_cron(expr: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    match CronFields::split(expr) {
        Ok(fields) => {
            field_checks::validate_fields(&fields, &mut result);
            field_checks::validate_day_exclusivity(&fields, &mut result);
            field_checks::warn_numeric_weekdays(&fields, &mut result);
        }
        Err(e) => result.error("cron", e.to_string()),
    }
    result
}

/// Shorthand for `validate_cron(expr).valid`.
pub fn is_valid_cron(expr: &str) -> bool {
    validate_cron(expr).valid
}
