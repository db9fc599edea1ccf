//! Configuration validation rules.
//!
//! - Custom dependency ids are non-empty and unique, including against
//!   built-in ids
//! - `skip` entries name a known dependency
//! - Each custom check has something to run

use crate::config::schema::{CustomCheck, EnvcheckConfig};
use crate::error::{EnvcheckError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
///
/// `builtin_ids` are the ids of the dependencies compiled into the binary.
pub fn validate_config(config: &EnvcheckConfig, builtin_ids: &[&str]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut known: HashSet<&str> = builtin_ids.iter().copied().collect();

    for dep in &config.dependencies {
        let id = dep.id.trim();
        if id.is_empty() {
            errors.push(ValidationError::new(
                "empty-id",
                "Custom dependency has an empty id".to_string(),
            ));
            continue;
        }
        if !known.insert(id) {
            errors.push(ValidationError::new(
                "duplicate-id",
                format!("Duplicate dependency id '{}'", id),
            ));
        }

        let empty_check = match &dep.check {
            CustomCheck::Command { command } => command.trim().is_empty(),
            CustomCheck::IndexedFile { file } => file.trim().is_empty(),
            CustomCheck::InstalledPackage { packages } => {
                packages.is_empty() || packages.values().any(|p| p.trim().is_empty())
            }
        };
        if empty_check {
            errors.push(ValidationError::new(
                "empty-check",
                format!("Dependency '{}' has nothing to run", id),
            ));
        }
    }

    for id in &config.skip {
        if !known.contains(id.as_str()) {
            errors.push(ValidationError::new(
                "unknown-skip",
                format!("Cannot skip unknown dependency '{}'", id),
            ));
        }
    }

    errors
}

/// Validate a configuration, failing with every problem joined into one message.
pub fn validate(config: &EnvcheckConfig, builtin_ids: &[&str]) -> Result<()> {
    let errors = validate_config(config, builtin_ids);

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            tracing::debug!("config rule {} failed: {}", e.rule, e.message);
        }
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnvcheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
