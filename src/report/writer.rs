//! Report directory scaffolding and file output.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{JsonFormatter, ReportFormat, ReportFormatter, TextFormatter};
use crate::environment::EnvironmentSnapshot;
use crate::error::{EnvProbeError, Result};

/// Base name of the report file; the extension follows the format.
pub const REPORT_FILE_STEM: &str = "environment";

/// Writes snapshot reports into an output directory.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use envprobe::environment::{EnvVars, EnvironmentClassifier};
/// use envprobe::report::{ReportFormat, ReportWriter};
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let env = EnvVars::from_pairs([("CI", "true")]);
/// let snapshot = EnvironmentClassifier::new().classify(&env, &|_: &Path| false);
///
/// let writer = ReportWriter::new(temp.path().join("reports"));
/// let path = writer.write(&snapshot, ReportFormat::Json).unwrap();
/// assert!(path.ends_with("environment.json"));
/// ```
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path the report file for `format` is written to.
    pub fn report_path(&self, format: ReportFormat) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", REPORT_FILE_STEM, format.extension()))
    }

    /// Create the output directory and each of `extra_dirs`.
    ///
    /// Directories that already exist count as success, so scaffolding can
    /// run any number of times. Returns every directory ensured.
    pub fn scaffold(&self, extra_dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut created = Vec::with_capacity(extra_dirs.len() + 1);

        for dir in std::iter::once(&self.output_dir).chain(extra_dirs) {
            ensure_dir(dir)?;
            created.push(dir.clone());
        }

        Ok(created)
    }

    /// Write a report for `snapshot`, creating the output directory if needed.
    ///
    /// Returns the path of the written file.
    pub fn write(&self, snapshot: &EnvironmentSnapshot, format: ReportFormat) -> Result<PathBuf> {
        ensure_dir(&self.output_dir)?;

        let content = match format {
            ReportFormat::Text => TextFormatter::new(false).format_to_string(snapshot),
            ReportFormat::Json => JsonFormatter::new()
                .with_timestamp(Utc::now())
                .format_to_string(snapshot),
        }?;

        let path = self.report_path(format);
        fs::write(&path, content).map_err(|source| EnvProbeError::ReportWriteFailed {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} report to {}", format.extension(), path.display());
        Ok(path)
    }
}

fn ensure_dir(dir: &Path) -> Result<()> {
    // create_dir_all already treats existing directories as success
    fs::create_dir_all(dir).map_err(|source| EnvProbeError::ReportWriteFailed {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{EnvVars, EnvironmentClassifier};
    use tempfile::TempDir;

    fn snapshot() -> EnvironmentSnapshot {
        let env = EnvVars::from_pairs([("GITLAB_CI", "true")]).with_platform("linux");
        EnvironmentClassifier::new().classify(&env, &|_: &Path| false)
    }

    #[test]
    fn report_path_uses_format_extension() {
        let writer = ReportWriter::new("/out");
        assert_eq!(
            writer.report_path(ReportFormat::Text),
            PathBuf::from("/out/environment.txt")
        );
        assert_eq!(
            writer.report_path(ReportFormat::Json),
            PathBuf::from("/out/environment.json")
        );
    }

    #[test]
    fn scaffold_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path().join("test-results/environment"));
        let extra = vec![temp.path().join("playwright-report")];

        let first = writer.scaffold(&extra).unwrap();
        let second = writer.scaffold(&extra).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert!(temp.path().join("test-results/environment").is_dir());
        assert!(temp.path().join("playwright-report").is_dir());
    }

    #[test]
    fn write_text_report() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path().join("out"));

        let path = writer.write(&snapshot(), ReportFormat::Text).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Environment\n"));
        assert!(content.contains("GitLab CI (gitlab)"));
    }

    #[test]
    fn write_json_report_has_timestamp() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path());

        let path = writer.write(&snapshot(), ReportFormat::Json).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["ci"]["provider"], "gitlab");
        assert!(parsed["generatedAt"].is_string());
    }

    #[test]
    fn write_overwrites_previous_report() {
        let temp = TempDir::new().unwrap();
        let writer = ReportWriter::new(temp.path());
        writer.write(&snapshot(), ReportFormat::Text).unwrap();
        let path = writer.write(&snapshot(), ReportFormat::Text).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content.matches("Environment\n").count(), 1);
    }

    #[test]
    fn scaffold_fails_when_path_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "not a dir").unwrap();

        let writer = ReportWriter::new(blocker.join("nested"));
        let result = writer.scaffold(&[]);
        assert!(matches!(
            result,
            Err(EnvProbeError::ReportWriteFailed { .. })
        ));
    }
}
