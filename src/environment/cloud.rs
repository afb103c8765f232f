//! Cloud provider and serverless platform detection.
//!
//! Serverless checks are a stricter subset of their parent provider's
//! signals, so a serverless platform always implies its cloud provider.

use super::rules::{any_match, Check};
use super::source::EnvVars;

const LAMBDA_VARS: &[Check] = &[Check::non_empty("AWS_LAMBDA_FUNCTION_NAME")];
const AWS_VARS: &[Check] = &[
    Check::non_empty("AWS_REGION"),
    Check::non_empty("AWS_DEFAULT_REGION"),
    Check::non_empty("AWS_EXECUTION_ENV"),
];

const AZURE_FUNCTIONS_VARS: &[Check] = &[
    Check::non_empty("FUNCTIONS_WORKER_RUNTIME"),
    Check::non_empty("AZURE_FUNCTIONS_ENVIRONMENT"),
];
const AZURE_VARS: &[Check] = &[
    Check::non_empty("WEBSITE_SITE_NAME"),
    Check::non_empty("WEBSITE_INSTANCE_ID"),
    Check::non_empty("AZURE_SUBSCRIPTION_ID"),
];

const CLOUD_FUNCTIONS_VARS: &[Check] = &[
    Check::non_empty("FUNCTION_TARGET"),
    Check::non_empty("FUNCTION_NAME"),
];
const GCP_VARS: &[Check] = &[
    Check::non_empty("GOOGLE_CLOUD_PROJECT"),
    Check::non_empty("GCLOUD_PROJECT"),
    Check::non_empty("GCP_PROJECT"),
];

/// Serverless platform classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServerlessInfo {
    pub lambda: bool,
    pub azure_functions: bool,
    pub cloud_functions: bool,
}

impl ServerlessInfo {
    pub fn detect(env: &EnvVars) -> Self {
        Self {
            lambda: any_match(LAMBDA_VARS, env),
            azure_functions: any_match(AZURE_FUNCTIONS_VARS, env),
            cloud_functions: any_match(CLOUD_FUNCTIONS_VARS, env),
        }
    }

    /// True if any serverless platform was detected.
    pub fn is_serverless(&self) -> bool {
        self.lambda || self.azure_functions || self.cloud_functions
    }

    /// Names of the detected platforms.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.lambda, "lambda"),
            (self.azure_functions, "azure-functions"),
            (self.cloud_functions, "cloud-functions"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

/// Cloud provider classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CloudInfo {
    pub aws: bool,
    pub azure: bool,
    pub gcp: bool,
}

impl CloudInfo {
    /// Detect cloud providers. Each serverless flag forces its parent.
    pub fn detect(env: &EnvVars, serverless: &ServerlessInfo) -> Self {
        Self {
            aws: serverless.lambda || any_match(AWS_VARS, env),
            azure: serverless.azure_functions || any_match(AZURE_VARS, env),
            gcp: serverless.cloud_functions || any_match(GCP_VARS, env),
        }
    }

    /// True if any cloud provider was detected.
    pub fn is_cloud(&self) -> bool {
        self.aws || self.azure || self.gcp
    }

    /// Names of the detected providers.
    pub fn names(&self) -> Vec<&'static str> {
        [(self.aws, "aws"), (self.azure, "azure"), (self.gcp, "gcp")]
            .into_iter()
            .filter_map(|(on, name)| on.then_some(name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(vars: &[(&str, &str)]) -> (CloudInfo, ServerlessInfo) {
        let env = EnvVars::from_pairs(vars.iter().copied());
        let serverless = ServerlessInfo::detect(&env);
        (CloudInfo::detect(&env, &serverless), serverless)
    }

    #[test]
    fn clean_env_has_no_cloud() {
        let (cloud, serverless) = detect(&[]);
        assert!(!cloud.is_cloud());
        assert!(!serverless.is_serverless());
    }

    #[test]
    fn lambda_implies_aws() {
        let (cloud, serverless) = detect(&[("AWS_LAMBDA_FUNCTION_NAME", "api-handler")]);
        assert!(serverless.lambda);
        assert!(serverless.is_serverless());
        assert!(cloud.aws);
        assert!(cloud.is_cloud());
    }

    #[test]
    fn aws_region_alone_is_not_lambda() {
        let (cloud, serverless) = detect(&[("AWS_REGION", "eu-west-1")]);
        assert!(cloud.aws);
        assert!(!serverless.lambda);
    }

    #[test]
    fn azure_functions_imply_azure() {
        let (cloud, serverless) = detect(&[("FUNCTIONS_WORKER_RUNTIME", "node")]);
        assert!(serverless.azure_functions);
        assert!(cloud.azure);

        let (cloud, serverless) = detect(&[("WEBSITE_SITE_NAME", "my-app")]);
        assert!(cloud.azure);
        assert!(!serverless.azure_functions);
    }

    #[test]
    fn cloud_functions_imply_gcp() {
        let (cloud, serverless) = detect(&[("FUNCTION_TARGET", "helloHttp")]);
        assert!(serverless.cloud_functions);
        assert!(cloud.gcp);

        let (cloud, serverless) = detect(&[("GOOGLE_CLOUD_PROJECT", "proj-1")]);
        assert!(cloud.gcp);
        assert!(!serverless.is_serverless());
    }

    #[test]
    fn empty_values_are_absent() {
        let (cloud, serverless) = detect(&[("AWS_LAMBDA_FUNCTION_NAME", ""), ("AWS_REGION", "")]);
        assert!(!cloud.aws);
        assert!(!serverless.lambda);
    }

    #[test]
    fn names_follow_field_order() {
        let (cloud, serverless) = detect(&[
            ("GCP_PROJECT", "p"),
            ("AWS_LAMBDA_FUNCTION_NAME", "f"),
        ]);
        assert_eq!(cloud.names(), vec!["aws", "gcp"]);
        assert_eq!(serverless.names(), vec!["lambda"]);
    }
}
