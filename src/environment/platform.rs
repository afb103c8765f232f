//! Operating system and WSL detection.

use serde::Serialize;

use super::source::EnvVars;

/// Variable set by WSL to the running distribution's name.
pub const WSL_DISTRO_VAR: &str = "WSL_DISTRO_NAME";

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    MacOS,
    Linux,
    Other,
}

impl Platform {
    /// Map a platform identifier to its family.
    ///
    /// Accepts both Rust (`std::env::consts::OS`) and Node (`process.platform`)
    /// spellings, case-insensitively.
    pub fn from_identifier(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "windows" | "win32" => Self::Windows,
            "macos" | "darwin" => Self::MacOS,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Lowercase name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::MacOS => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsInfo {
    /// OS family.
    pub platform: Platform,
    /// WSL distribution name, only ever set on Linux.
    pub wsl_distro: Option<String>,
}

impl OsInfo {
    /// Detect the OS from the snapshot's platform identifier.
    pub fn detect(env: &EnvVars) -> Self {
        let platform = Platform::from_identifier(env.platform());
        let wsl_distro = match platform {
            Platform::Linux => env
                .get(WSL_DISTRO_VAR)
                .filter(|name| !name.is_empty())
                .map(str::to_string),
            _ => None,
        };

        Self {
            platform,
            wsl_distro,
        }
    }

    pub fn is_windows(&self) -> bool {
        self.platform == Platform::Windows
    }

    pub fn is_macos(&self) -> bool {
        self.platform == Platform::MacOS
    }

    pub fn is_linux(&self) -> bool {
        self.platform == Platform::Linux
    }

    /// Linux running under the Windows Subsystem for Linux.
    pub fn is_wsl(&self) -> bool {
        self.is_linux() && self.wsl_distro.is_some()
    }
}
