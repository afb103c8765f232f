//! Environment classification.
//!
//! Turns an [`EnvVars`] snapshot and a [`FileProbe`] into an
//! [`EnvironmentSnapshot`]. Classification has no side effects besides
//! debug logging and never fails: malformed or missing input classifies as
//! absent.

use std::collections::BTreeMap;

use super::ci::{CiInfo, CiMatch};
use super::cloud::{CloudInfo, ServerlessInfo};
use super::container::ContainerInfo;
use super::lifecycle::{Lifecycle, DEFAULT_LIFECYCLE_VAR};
use super::platform::OsInfo;
use super::rules::DetectRule;
use super::snapshot::EnvironmentSnapshot;
use super::source::{EnvVars, FileProbe, HostFs};

/// Classifies the execution context.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use envprobe::environment::{EnvVars, EnvironmentClassifier};
///
/// let env = EnvVars::from_pairs([("GITHUB_ACTIONS", "true"), ("CI", "true")])
///     .with_platform("linux");
/// let no_files = |_: &Path| false;
///
/// let snapshot = EnvironmentClassifier::new().classify(&env, &no_files);
/// assert!(snapshot.is_ci());
/// assert_eq!(snapshot.ci_provider().unwrap().name(), "github");
/// assert!(snapshot.os.is_linux());
/// assert!(snapshot.lifecycle.is_test());
/// ```
#[derive(Debug, Clone)]
pub struct EnvironmentClassifier {
    /// Custom CI providers from config, ranked after built-ins.
    /// BTreeMap for deterministic (alphabetical) ordering.
    custom_ci: BTreeMap<String, Vec<DetectRule>>,
    lifecycle_var: String,
}

impl EnvironmentClassifier {
    /// Create a classifier with only built-in rules.
    pub fn new() -> Self {
        Self {
            custom_ci: BTreeMap::new(),
            lifecycle_var: DEFAULT_LIFECYCLE_VAR.to_string(),
        }
    }

    /// Add custom CI provider rules.
    pub fn with_custom_rules(mut self, rules: BTreeMap<String, Vec<DetectRule>>) -> Self {
        self.custom_ci = rules;
        self
    }

    /// Read the lifecycle stage from a different variable.
    pub fn with_lifecycle_var(mut self, var: impl Into<String>) -> Self {
        self.lifecycle_var = var.into();
        self
    }

    /// The variable the lifecycle stage is read from.
    pub fn lifecycle_var(&self) -> &str {
        &self.lifecycle_var
    }

    /// Classify the given inputs.
    pub fn classify(&self, env: &EnvVars, files: &dyn FileProbe) -> EnvironmentSnapshot {
        let os = OsInfo::detect(env);
        let ci = CiInfo::detect(env, &self.custom_ci);
        let container = ContainerInfo::detect(env, os.platform, files);
        let serverless = ServerlessInfo::detect(env);
        let cloud = CloudInfo::detect(env, &serverless);
        let lifecycle = Lifecycle::detect(env, &self.lifecycle_var);

        if ci.provider_count() > 1 {
            let mut names: Vec<&str> = ci.providers.iter().map(|p| p.name()).collect();
            names.extend(ci.custom.iter().map(String::as_str));
            tracing::warn!(
                "Multiple CI providers detected: {}. Using '{}' (highest priority).",
                names.join(", "),
                names[0],
            );
        }

        let snapshot = EnvironmentSnapshot {
            os,
            ci,
            container,
            cloud,
            serverless,
            lifecycle,
        };

        let provider = snapshot.ci_provider();
        tracing::debug!(
            platform = %snapshot.os.platform,
            ci = snapshot.is_ci(),
            provider = provider.as_ref().map(CiMatch::name).unwrap_or("none"),
            containerized = snapshot.is_containerized(),
            cloud = snapshot.is_cloud(),
            serverless = snapshot.is_serverless(),
            lifecycle = %snapshot.lifecycle,
            "Classified environment"
        );

        snapshot
    }

    /// Classify the current process environment and host filesystem.
    pub fn classify_host(&self) -> EnvironmentSnapshot {
        self.classify(&EnvVars::from_process(), &HostFs)
    }
}

impl Default for EnvironmentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{CiProvider, Platform};
    use std::path::Path;

    fn no_files(_: &Path) -> bool {
        false
    }

    fn classify(vars: &[(&str, &str)]) -> EnvironmentSnapshot {
        let env = EnvVars::from_pairs(vars.iter().copied()).with_platform("linux");
        EnvironmentClassifier::new().classify(&env, &no_files)
    }

    #[test]
    fn clean_environment() {
        let snapshot = classify(&[]);
        assert_eq!(snapshot.os.platform, Platform::Linux);
        assert!(!snapshot.is_ci());
        assert!(!snapshot.is_containerized());
        assert!(!snapshot.is_cloud());
        assert!(!snapshot.is_serverless());
        assert_eq!(snapshot.lifecycle, Lifecycle::Test);
    }

    #[test]
    fn full_ci_container_cloud_mix() {
        let snapshot = classify(&[
            ("GITLAB_CI", "true"),
            ("KUBERNETES_SERVICE_HOST", "10.0.0.1"),
            ("GOOGLE_CLOUD_PROJECT", "frontend"),
            ("NODE_ENV", "production"),
        ]);
        assert_eq!(
            snapshot.ci_provider(),
            Some(CiMatch::Builtin(CiProvider::GitLab))
        );
        assert!(snapshot.container.kubernetes);
        assert!(snapshot.cloud.gcp);
        assert!(snapshot.lifecycle.is_production());
    }

    #[test]
    fn custom_lifecycle_var() {
        let env = EnvVars::from_pairs([("APP_ENV", "development")]);
        let snapshot = EnvironmentClassifier::new()
            .with_lifecycle_var("APP_ENV")
            .classify(&env, &no_files);
        assert!(snapshot.lifecycle.is_development());
    }

    #[test]
    fn custom_rules_are_used() {
        let mut rules = BTreeMap::new();
        rules.insert(
            "woodpecker".to_string(),
            vec![DetectRule::present("WOODPECKER_URL")],
        );
        let classifier = EnvironmentClassifier::new().with_custom_rules(rules);
        let env = EnvVars::from_pairs([("WOODPECKER_URL", "https://ci.example.com")]);
        let snapshot = classifier.classify(&env, &no_files);
        assert_eq!(snapshot.ci_provider().unwrap().name(), "woodpecker");
    }

    #[test]
    fn classification_is_idempotent() {
        let vars = [("CIRCLECI", "true"), ("AWS_REGION", "us-east-1")];
        assert_eq!(classify(&vars), classify(&vars));
    }

    #[test]
    fn classify_host_does_not_panic() {
        let _ = EnvironmentClassifier::default().classify_host();
    }

    #[test]
    fn default_lifecycle_var_is_node_env() {
        assert_eq!(EnvironmentClassifier::new().lifecycle_var(), "NODE_ENV");
    }
}
