//! Plain-text report formatter.
//!
//! One line per category, suitable for CI logs and `environment.txt`.

use std::io::Write;

use console::style;

use super::ReportFormatter;
use crate::environment::{CiMatch, EnvironmentSnapshot};

/// Formats a snapshot for human consumption.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
}

impl TextFormatter {
    /// Create a new text formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn label(&self, text: &str) -> String {
        // pad before styling so ANSI codes don't skew alignment
        let padded = format!("{:<12}", format!("{}:", text));
        if self.use_color {
            style(padded).bold().to_string()
        } else {
            padded
        }
    }

    fn list_or_none(names: &[&str]) -> String {
        if names.is_empty() {
            "none".to_string()
        } else {
            names.join(", ")
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format<W: Write>(
        &self,
        snapshot: &EnvironmentSnapshot,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let title = if self.use_color {
            style("Environment").magenta().bold().to_string()
        } else {
            "Environment".to_string()
        };
        writeln!(writer, "{}", title)?;

        let os = match &snapshot.os.wsl_distro {
            Some(distro) if snapshot.os.is_wsl() => {
                format!("{} (WSL: {})", snapshot.os.platform, distro)
            }
            _ => snapshot.os.platform.to_string(),
        };
        writeln!(writer, "  {}{}", self.label("OS"), os)?;

        let ci = match snapshot.ci_provider() {
            Some(CiMatch::Builtin(p)) => format!("{} ({})", p.display_name(), p.name()),
            Some(CiMatch::Custom(name)) => format!("{} (custom)", name),
            Some(CiMatch::Generic) => "yes (generic)".to_string(),
            None => "no".to_string(),
        };
        writeln!(writer, "  {}{}", self.label("CI"), ci)?;

        writeln!(
            writer,
            "  {}{}",
            self.label("Container"),
            Self::list_or_none(&snapshot.container.names())
        )?;
        writeln!(
            writer,
            "  {}{}",
            self.label("Cloud"),
            Self::list_or_none(&snapshot.cloud.names())
        )?;
        writeln!(
            writer,
            "  {}{}",
            self.label("Serverless"),
            Self::list_or_none(&snapshot.serverless.names())
        )?;
        writeln!(writer, "  {}{}", self.label("Lifecycle"), snapshot.lifecycle)?;

        Ok(())
    }
}
