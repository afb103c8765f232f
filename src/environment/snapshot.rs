//! The classification result.

use super::ci::{CiInfo, CiMatch};
use super::cloud::{CloudInfo, ServerlessInfo};
use super::container::ContainerInfo;
use super::lifecycle::Lifecycle;
use super::platform::OsInfo;

/// Point-in-time classification of the execution context.
///
/// Computed on demand by
/// [`EnvironmentClassifier::classify`](super::EnvironmentClassifier::classify)
/// and never cached. Aggregate flags (`is_ci`, `is_containerized`,
/// `is_cloud`, `is_serverless`) are derived from their constituents rather
/// than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    pub os: OsInfo,
    pub ci: CiInfo,
    pub container: ContainerInfo,
    pub cloud: CloudInfo,
    pub serverless: ServerlessInfo,
    pub lifecycle: Lifecycle,
}

impl EnvironmentSnapshot {
    pub fn is_ci(&self) -> bool {
        self.ci.is_ci()
    }

    pub fn ci_provider(&self) -> Option<CiMatch> {
        self.ci.provider()
    }

    pub fn is_containerized(&self) -> bool {
        self.container.is_containerized()
    }

    pub fn is_cloud(&self) -> bool {
        self.cloud.is_cloud()
    }

    pub fn is_serverless(&self) -> bool {
        self.serverless.is_serverless()
    }
}
