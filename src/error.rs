//! Error types for envprobe operations.
//!
//! This module defines [`EnvProbeError`], the error type used by the
//! configuration, reporting and CLI layers, and a [`Result`] type alias.
//!
//! # Error Handling Strategy
//!
//! - Classification itself never fails: malformed input is treated as absent
//! - Use `EnvProbeError` for configuration and report-writing failures
//! - Use `anyhow::Error` (via `EnvProbeError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envprobe operations.
#[derive(Debug, Error)]
pub enum EnvProbeError {
    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Unrecognised report format name.
    #[error("Unknown report format: {name} (expected 'text' or 'json')")]
    UnknownFormat { name: String },

    /// Writing a report or creating its directories failed.
    #[error("Failed to write report to {path}: {source}")]
    ReportWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envprobe operations.
pub type Result<T> = std::result::Result<T, EnvProbeError>;
