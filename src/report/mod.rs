//! Snapshot reports.
//!
//! Formatters render an [`EnvironmentSnapshot`] as plain text or JSON, and
//! [`ReportWriter`] scaffolds an output directory and writes the report
//! file there.

pub mod json;
pub mod text;
pub mod writer;

use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::environment::EnvironmentSnapshot;
use crate::error::EnvProbeError;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    /// File extension for report files in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = EnvProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(EnvProbeError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Trait for formatting a snapshot.
pub trait ReportFormatter {
    /// Format the snapshot to the given writer.
    fn format<W: Write>(
        &self,
        snapshot: &EnvironmentSnapshot,
        writer: &mut W,
    ) -> std::io::Result<()>;

    /// Format the snapshot into a string.
    fn format_to_string(&self, snapshot: &EnvironmentSnapshot) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.format(snapshot, &mut buf)?;
        String::from_utf8(buf).map_err(std::io::Error::other)
    }
}

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use writer::ReportWriter;
