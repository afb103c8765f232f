//! Shared inputs for commands that classify the environment.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ProbeConfig;
use crate::environment::{EnvVars, EnvironmentSnapshot, FileProbe, HostFs};

/// Project root, loaded config and classifier inputs.
pub struct ProbeContext {
    project_root: PathBuf,
    config: ProbeConfig,
    env: EnvVars,
    files: Box<dyn FileProbe>,
}

impl ProbeContext {
    /// Create a context with explicit inputs.
    pub fn new(
        project_root: impl Into<PathBuf>,
        config: ProbeConfig,
        env: EnvVars,
        files: impl FileProbe + 'static,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            config,
            env,
            files: Box::new(files),
        }
    }

    /// Create a context reading the process environment and host filesystem.
    pub fn from_host(project_root: impl Into<PathBuf>, config: ProbeConfig) -> Self {
        Self::new(project_root, config, EnvVars::from_process(), HostFs)
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// The loaded config.
    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Value of an input variable.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name)
    }

    /// Resolve `path` against the project root. Absolute paths are kept.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.project_root.join(path)
    }

    /// Classify the context's inputs using the loaded config.
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        self.config
            .classifier()
            .classify(&self.env, self.files.as_ref())
    }
}

impl fmt::Debug for ProbeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeContext")
            .field("project_root", &self.project_root)
            .field("config", &self.config)
            .field("env_vars", &self.env.len())
            .finish_non_exhaustive()
    }
}
