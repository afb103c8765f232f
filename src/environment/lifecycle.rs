//! Node lifecycle stage detection.

use std::str::FromStr;

use serde::Serialize;

use super::source::EnvVars;

/// Default variable holding the lifecycle stage.
pub const DEFAULT_LIFECYCLE_VAR: &str = "NODE_ENV";

/// Lifecycle stage. Exactly one holds for any snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    Development,
    Production,
    /// Also the inert default when the variable is unset or unrecognised.
    #[default]
    Test,
    Staging,
}

impl FromStr for Lifecycle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            "staging" => Ok(Self::Staging),
            _ => Err(format!("unknown lifecycle stage: {}", s)),
        }
    }
}

impl Lifecycle {
    /// Read the lifecycle stage from `var`.
    pub fn detect(env: &EnvVars, var: &str) -> Self {
        match env.get(var) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::debug!("Ignoring unrecognised {}={:?}", var, value);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
            Self::Staging => "staging",
        }
    }

    pub fn is_development(&self) -> bool {
        *self == Self::Development
    }

    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }

    pub fn is_test(&self) -> bool {
        *self == Self::Test
    }

    pub fn is_staging(&self) -> bool {
        *self == Self::Staging
    }
}

impl std::fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
