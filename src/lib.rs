//! envprobe - Execution environment detection.
//!
//! envprobe answers "where am I running?" for test suites and scripts:
//! operating system and WSL, CI provider, container runtime, cloud and
//! serverless platform, and the Node lifecycle stage. It can print the
//! result, test a single flag for shell conditionals, or write a report
//! file next to test artifacts.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Loading and validating `.envprobe.yml`
//! - [`environment`] - Environment classification
//! - [`error`] - Error types and result aliases
//! - [`report`] - Text and JSON reports
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use envprobe::environment::{EnvVars, EnvironmentClassifier};
//!
//! let env = EnvVars::from_pairs([("GITHUB_ACTIONS", "true"), ("NODE_ENV", "production")]);
//! let snapshot = EnvironmentClassifier::new().classify(&env, &|_: &Path| false);
//!
//! assert!(snapshot.is_ci());
//! assert!(snapshot.lifecycle.is_production());
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{EnvProbeError, Result};
