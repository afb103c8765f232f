//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - `lifecycle_var` must not be empty
//! - Custom CI providers need at least one rule, each naming a variable
//! - Custom provider names must not shadow built-in providers or `generic`

use crate::config::schema::ProbeConfig;
use crate::environment::CiProvider;
use crate::error::{EnvProbeError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Provider name if error is provider-specific
    pub provider: Option<String>,
}

/// Validate a configuration and return all errors.
///
/// Collects every error rather than stopping at the first one.
pub fn validate_config(config: &ProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.lifecycle_var.trim().is_empty() {
        errors.push(ValidationError {
            rule: "empty-lifecycle-var".to_string(),
            message: "'lifecycle_var' must name an environment variable".to_string(),
            provider: None,
        });
    }

    errors.extend(validate_ci_providers(config));
    errors
}

fn validate_ci_providers(config: &ProbeConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (name, rules) in &config.ci_providers {
        let lowered = name.to_ascii_lowercase();
        if lowered == "generic" || CiProvider::from_name(&lowered).is_some() {
            errors.push(ValidationError {
                rule: "builtin-provider-name".to_string(),
                message: format!(
                    "CI provider '{}' shadows a built-in provider; pick another name",
                    name
                ),
                provider: Some(name.clone()),
            });
        }

        if rules.is_empty() {
            errors.push(ValidationError {
                rule: "empty-provider-rules".to_string(),
                message: format!("CI provider '{}' has no detection rules", name),
                provider: Some(name.clone()),
            });
        }

        if rules.iter().any(|rule| rule.env.trim().is_empty()) {
            errors.push(ValidationError {
                rule: "empty-rule-env".to_string(),
                message: format!("CI provider '{}' has a rule with an empty 'env'", name),
                provider: Some(name.clone()),
            });
        }
    }

    errors
}

/// Validate configuration, folding every failure into one error.
///
/// Messages are joined so the user sees every problem at once.
pub fn validate(config: &ProbeConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnvProbeError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
