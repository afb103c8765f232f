//! Configuration schema definitions for envprobe.
//!
//! These structs map to the optional `.envprobe.yml` file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::environment::{DetectRule, EnvironmentClassifier, DEFAULT_LIFECYCLE_VAR};
use crate::report::ReportFormat;

/// Root configuration structure for `.envprobe.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Variable holding the lifecycle stage.
    #[serde(default = "default_lifecycle_var")]
    pub lifecycle_var: String,

    /// Extra CI providers, keyed by name. A provider matches if any of
    /// its rules match.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub ci_providers: BTreeMap<String, Vec<DetectRule>>,

    /// Report defaults
    pub report: ReportSettings,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            lifecycle_var: default_lifecycle_var(),
            ci_providers: BTreeMap::new(),
            report: ReportSettings::default(),
        }
    }
}

impl ProbeConfig {
    /// Build a classifier that honours this config.
    pub fn classifier(&self) -> EnvironmentClassifier {
        EnvironmentClassifier::new()
            .with_custom_rules(self.ci_providers.clone())
            .with_lifecycle_var(self.lifecycle_var.clone())
    }
}

/// Settings for `envprobe report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Where reports are written, relative to the project root.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Report format: text or json
    pub format: ReportFormat,

    /// Extra directories to create alongside the report (relative to the
    /// project root), e.g. test-results.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directories: Vec<PathBuf>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            format: ReportFormat::default(),
            directories: Vec::new(),
        }
    }
}

fn default_lifecycle_var() -> String {
    DEFAULT_LIFECYCLE_VAR.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("test-results/environment")
}
