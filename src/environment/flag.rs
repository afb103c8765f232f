//! Named boolean queries over a snapshot.
//!
//! Used by `envprobe check <FLAG>` so shell scripts can branch on a single
//! classification result.

use clap::ValueEnum;

use super::snapshot::EnvironmentSnapshot;

/// A single yes/no question about the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvFlag {
    Ci,
    Docker,
    Kubernetes,
    Compose,
    Swarm,
    Containerized,
    Aws,
    Azure,
    Gcp,
    Cloud,
    Lambda,
    AzureFunctions,
    CloudFunctions,
    Serverless,
    Windows,
    Macos,
    Linux,
    Wsl,
    Development,
    Production,
    Test,
    Staging,
}

impl EnvFlag {
    /// Evaluate this flag against a snapshot.
    pub fn evaluate(&self, snapshot: &EnvironmentSnapshot) -> bool {
        match self {
            Self::Ci => snapshot.is_ci(),
            Self::Docker => snapshot.container.docker,
            Self::Kubernetes => snapshot.container.kubernetes,
            Self::Compose => snapshot.container.compose,
            Self::Swarm => snapshot.container.swarm,
            Self::Containerized => snapshot.is_containerized(),
            Self::Aws => snapshot.cloud.aws,
            Self::Azure => snapshot.cloud.azure,
            Self::Gcp => snapshot.cloud.gcp,
            Self::Cloud => snapshot.is_cloud(),
            Self::Lambda => snapshot.serverless.lambda,
            Self::AzureFunctions => snapshot.serverless.azure_functions,
            Self::CloudFunctions => snapshot.serverless.cloud_functions,
            Self::Serverless => snapshot.is_serverless(),
            Self::Windows => snapshot.os.is_windows(),
            Self::Macos => snapshot.os.is_macos(),
            Self::Linux => snapshot.os.is_linux(),
            Self::Wsl => snapshot.os.is_wsl(),
            Self::Development => snapshot.lifecycle.is_development(),
            Self::Production => snapshot.lifecycle.is_production(),
            Self::Test => snapshot.lifecycle.is_test(),
            Self::Staging => snapshot.lifecycle.is_staging(),
        }
    }

    /// The flag's command-line spelling.
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{EnvVars, EnvironmentClassifier};
    use std::path::Path;

    fn snapshot(platform: &str, vars: &[(&str, &str)]) -> EnvironmentSnapshot {
        let env = EnvVars::from_pairs(vars.iter().copied()).with_platform(platform);
        EnvironmentClassifier::new().classify(&env, &|_: &Path| false)
    }

    #[test]
    fn flags_reflect_snapshot() {
        let snap = snapshot(
            "linux",
            &[
                ("CI", "true"),
                ("AWS_LAMBDA_FUNCTION_NAME", "handler"),
                ("WSL_DISTRO_NAME", "Debian"),
                ("NODE_ENV", "staging"),
            ],
        );
        assert!(EnvFlag::Ci.evaluate(&snap));
        assert!(EnvFlag::Lambda.evaluate(&snap));
        assert!(EnvFlag::Aws.evaluate(&snap));
        assert!(EnvFlag::Serverless.evaluate(&snap));
        assert!(EnvFlag::Cloud.evaluate(&snap));
        assert!(EnvFlag::Wsl.evaluate(&snap));
        assert!(EnvFlag::Linux.evaluate(&snap));
        assert!(EnvFlag::Staging.evaluate(&snap));
        assert!(!EnvFlag::Test.evaluate(&snap));
        assert!(!EnvFlag::Docker.evaluate(&snap));
        assert!(!EnvFlag::Windows.evaluate(&snap));
    }

    #[test]
    fn names_are_kebab_case() {
        assert_eq!(EnvFlag::AzureFunctions.name(), "azure-functions");
        assert_eq!(EnvFlag::Ci.name(), "ci");
    }

    #[test]
    fn parses_from_cli_spelling() {
        assert_eq!(
            EnvFlag::from_str("cloud-functions", false),
            Ok(EnvFlag::CloudFunctions)
        );
        assert!(EnvFlag::from_str("heroku", false).is_err());
    }
}
