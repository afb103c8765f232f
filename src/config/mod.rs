//! Configuration loading, parsing, and validation for envprobe.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use envprobe::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".envprobe.yml"), "lifecycle_var: APP_ENV").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.lifecycle_var, "APP_ENV");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::{ProbeConfig, ReportSettings};
pub use validator::{validate, validate_config, ValidationError};
