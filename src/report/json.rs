//! JSON report formatter.
//!
//! Emits camelCase keys (`isCI`, `isContainerized`, ...) so test tooling
//! written in JavaScript can consume the report without remapping.

use std::collections::BTreeMap;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ReportFormatter;
use crate::environment::{EnvironmentSnapshot, CI_PROVIDERS};
use crate::error::Result;

/// Formats a snapshot as JSON.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Timestamp recorded as `generatedAt`. Omitted when `None`.
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    generated_at: Option<String>,
    os: JsonOs<'a>,
    ci: JsonCi,
    container: JsonContainer,
    cloud: JsonCloud,
    serverless: JsonServerless,
    lifecycle: JsonLifecycle,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOs<'a> {
    platform: &'static str,
    is_windows: bool,
    #[serde(rename = "isMacOS")]
    is_macos: bool,
    is_linux: bool,
    #[serde(rename = "isWSL")]
    is_wsl: bool,
    wsl_distro: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonCi {
    #[serde(rename = "isCI")]
    is_ci: bool,
    provider: Option<String>,
    #[serde(rename = "isGeneric")]
    generic: bool,
    #[serde(rename = "customProviders", skip_serializing_if = "Vec::is_empty")]
    custom: Vec<String>,
    #[serde(flatten)]
    providers: BTreeMap<&'static str, bool>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonContainer {
    is_docker: bool,
    is_kubernetes: bool,
    is_docker_compose: bool,
    is_docker_swarm: bool,
    is_containerized: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonCloud {
    #[serde(rename = "isAWS")]
    is_aws: bool,
    is_azure: bool,
    #[serde(rename = "isGCP")]
    is_gcp: bool,
    is_cloud_environment: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonServerless {
    is_lambda: bool,
    is_azure_functions: bool,
    is_cloud_functions: bool,
    is_serverless: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonLifecycle {
    mode: &'static str,
    is_development: bool,
    is_production: bool,
    is_test: bool,
    is_staging: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter without a timestamp.
    pub fn new() -> Self {
        Self { generated_at: None }
    }

    /// Record `time` as the report's `generatedAt`.
    pub fn with_timestamp(mut self, time: DateTime<Utc>) -> Self {
        self.generated_at = Some(time);
        self
    }

    /// Serialize the snapshot to a `serde_json::Value`.
    pub fn to_value(&self, snapshot: &EnvironmentSnapshot) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.report(snapshot))?)
    }

    fn report<'a>(&self, snapshot: &'a EnvironmentSnapshot) -> JsonReport<'a> {
        let os = &snapshot.os;
        let ci = &snapshot.ci;

        JsonReport {
            generated_at: self.generated_at.map(|t| t.to_rfc3339()),
            os: JsonOs {
                platform: os.platform.as_str(),
                is_windows: os.is_windows(),
                is_macos: os.is_macos(),
                is_linux: os.is_linux(),
                is_wsl: os.is_wsl(),
                wsl_distro: os.wsl_distro.as_deref(),
            },
            ci: JsonCi {
                is_ci: ci.is_ci(),
                provider: ci.provider().map(|p| p.name().to_string()),
                generic: ci.generic,
                custom: ci.custom.clone(),
                providers: CI_PROVIDERS
                    .iter()
                    .map(|rule| (rule.provider.flag_name(), ci.is_provider(rule.provider)))
                    .collect(),
            },
            container: JsonContainer {
                is_docker: snapshot.container.docker,
                is_kubernetes: snapshot.container.kubernetes,
                is_docker_compose: snapshot.container.compose,
                is_docker_swarm: snapshot.container.swarm,
                is_containerized: snapshot.is_containerized(),
            },
            cloud: JsonCloud {
                is_aws: snapshot.cloud.aws,
                is_azure: snapshot.cloud.azure,
                is_gcp: snapshot.cloud.gcp,
                is_cloud_environment: snapshot.is_cloud(),
            },
            serverless: JsonServerless {
                is_lambda: snapshot.serverless.lambda,
                is_azure_functions: snapshot.serverless.azure_functions,
                is_cloud_functions: snapshot.serverless.cloud_functions,
                is_serverless: snapshot.is_serverless(),
            },
            lifecycle: JsonLifecycle {
                mode: snapshot.lifecycle.as_str(),
                is_development: snapshot.lifecycle.is_development(),
                is_production: snapshot.lifecycle.is_production(),
                is_test: snapshot.lifecycle.is_test(),
                is_staging: snapshot.lifecycle.is_staging(),
            },
        }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        snapshot: &EnvironmentSnapshot,
        writer: &mut W,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.report(snapshot))
            .map_err(std::io::Error::other)?;
        writeln!(writer)?;
        Ok(())
    }
}
