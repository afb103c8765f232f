//! Classification inputs.
//!
//! The classifier never reads the process environment or the filesystem
//! directly. Callers hand it an [`EnvVars`] snapshot and a [`FileProbe`],
//! which keeps classification pure and testable without mutating
//! process-wide state.

use std::collections::HashMap;
use std::path::Path;

/// Snapshot of environment variables plus the host platform identifier.
///
/// # Example
///
/// ```
/// use envprobe::environment::EnvVars;
///
/// let env = EnvVars::from_pairs([("CI", "true")]).with_platform("linux");
/// assert_eq!(env.get("CI"), Some("true"));
/// assert!(env.is_non_empty("CI"));
/// assert!(!env.is_non_empty("GITHUB_ACTIONS"));
/// assert_eq!(env.platform(), "linux");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars {
    vars: HashMap<String, String>,
    platform: String,
}

impl EnvVars {
    /// Create an empty snapshot for the current host platform.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are dropped,
    /// so they classify as absent.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        Self {
            vars,
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Build a snapshot from key/value pairs (host platform).
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            platform: std::env::consts::OS.to_string(),
        }
    }

    /// Override the platform identifier (e.g. "linux", "darwin", "win32").
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Set a variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Get a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Check that a variable is set to a non-empty value.
    pub fn is_non_empty(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// The platform identifier this snapshot was taken on.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Check if no variables were captured.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Filesystem marker checks used during classification.
///
/// Any `Fn(&Path) -> bool` is a probe, which is the usual way to fake the
/// filesystem in tests.
pub trait FileProbe {
    /// Check whether a path exists. Errors count as "not present".
    fn exists(&self, path: &Path) -> bool;

    /// Read a small marker file. Probes that only test existence return `None`.
    fn read_to_string(&self, _path: &Path) -> Option<String> {
        None
    }
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

impl FileProbe for HostFs {
    fn exists(&self, path: &Path) -> bool {
        // try_exists surfaces permission errors; those count as absent
        path.try_exists().unwrap_or(false)
    }

    fn read_to_string(&self, path: &Path) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }
}
