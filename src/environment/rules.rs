//! Declarative detection rules.
//!
//! Every detector in this crate is a table of [`Check`]s: a provider is
//! present when any one of its checks holds. Built-in tables use
//! `&'static` data; user-defined rules from config use [`DetectRule`].

use serde::{Deserialize, Serialize};

use super::source::EnvVars;

/// How a single variable is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Test {
    /// Value equals the string exactly.
    Equals(&'static str),
    /// Value equals the string, ignoring ASCII case.
    EqualsIgnoreCase(&'static str),
    /// Value is set and non-empty.
    NonEmpty,
    /// Value is non-empty and not a falsy literal ("false", "0").
    Enabled,
}

/// A single variable check in a detection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Variable name.
    pub var: &'static str,
    /// How the value is tested.
    pub test: Test,
}

impl Check {
    /// Check that `var` equals `value` exactly.
    pub const fn equals(var: &'static str, value: &'static str) -> Self {
        Self {
            var,
            test: Test::Equals(value),
        }
    }

    /// Check that `var` equals `value`, ignoring ASCII case.
    pub const fn equals_ignore_case(var: &'static str, value: &'static str) -> Self {
        Self {
            var,
            test: Test::EqualsIgnoreCase(value),
        }
    }

    /// Check that `var` is non-empty.
    pub const fn non_empty(var: &'static str) -> Self {
        Self {
            var,
            test: Test::NonEmpty,
        }
    }

    /// Check that `var` is set to something other than a falsy literal.
    pub const fn enabled(var: &'static str) -> Self {
        Self {
            var,
            test: Test::Enabled,
        }
    }

    /// Evaluate this check against an environment.
    pub fn matches(&self, env: &EnvVars) -> bool {
        let Some(value) = env.get(self.var) else {
            return false;
        };

        match self.test {
            Test::Equals(expected) => value == expected,
            Test::EqualsIgnoreCase(expected) => value.eq_ignore_ascii_case(expected),
            Test::NonEmpty => !value.is_empty(),
            Test::Enabled => {
                !value.is_empty()
                    && !value.eq_ignore_ascii_case("false")
                    && value != "0"
            }
        }
    }
}

/// Returns the first check in `checks` that holds.
pub fn first_match<'a>(checks: &'a [Check], env: &EnvVars) -> Option<&'a Check> {
    checks.iter().find(|check| check.matches(env))
}

/// True if any check in `checks` holds.
pub fn any_match(checks: &[Check], env: &EnvVars) -> bool {
    first_match(checks, env).is_some()
}

/// A user-defined detection rule: check if an env var is set (optionally to a
/// specific value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectRule {
    /// The environment variable to check.
    pub env: String,
    /// If set, the variable must equal this value. If None, the variable
    /// must be non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl DetectRule {
    /// Rule that matches any non-empty value.
    pub fn present(env: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            value: None,
        }
    }

    /// Rule that matches one exact value.
    pub fn equals(env: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            value: Some(value.into()),
        }
    }

    /// Check if this rule matches.
    pub fn matches(&self, env: &EnvVars) -> bool {
        match (env.get(&self.env), &self.value) {
            (Some(actual), Some(expected)) => actual == expected,
            (Some(actual), None) => !actual.is_empty(),
            (None, _) => false,
        }
    }
}
