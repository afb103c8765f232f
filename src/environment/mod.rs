//! Execution environment classification.
//!
//! Determines where envprobe is running: operating system (and WSL), CI
//! provider, container runtime, cloud provider, serverless platform and
//! Node lifecycle stage. Inputs are injected as [`EnvVars`] and a
//! [`FileProbe`], so [`EnvironmentClassifier::classify`] is a pure function.
//!
//! CI provider priority, highest first:
//!
//! 1. Built-in providers in [`CI_PROVIDERS`] order (GitHub, Jenkins, GitLab,
//!    CircleCI, Travis, Azure, TeamCity, then the rest)
//! 2. Custom providers from config (alphabetical)
//! 3. Generic CI variables

pub mod ci;
pub mod classifier;
pub mod cloud;
pub mod container;
pub mod flag;
pub mod lifecycle;
pub mod platform;
pub mod rules;
pub mod snapshot;
pub mod source;

pub use ci::{CiInfo, CiMatch, CiProvider, CI_PROVIDERS};
pub use classifier::EnvironmentClassifier;
pub use cloud::{CloudInfo, ServerlessInfo};
pub use container::{ContainerInfo, DOCKER_MARKER};
pub use flag::EnvFlag;
pub use lifecycle::{Lifecycle, DEFAULT_LIFECYCLE_VAR};
pub use platform::{OsInfo, Platform};
pub use rules::{Check, DetectRule};
pub use snapshot::EnvironmentSnapshot;
pub use source::{EnvVars, FileProbe, HostFs};
