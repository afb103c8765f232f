//! Container runtime detection.

use std::path::Path;

use super::platform::Platform;
use super::rules::{any_match, Check};
use super::source::{EnvVars, FileProbe};

/// Marker file Docker creates at the container root.
pub const DOCKER_MARKER: &str = "/.dockerenv";

/// Control-group listing of PID 1; mentions "docker" inside containers.
pub const CGROUP_FILE: &str = "/proc/1/cgroup";

const DOCKER_VARS: &[Check] = &[Check::non_empty("DOCKER_CONTAINER")];
const KUBERNETES_VARS: &[Check] = &[Check::non_empty("KUBERNETES_SERVICE_HOST")];
const COMPOSE_VARS: &[Check] = &[
    Check::non_empty("COMPOSE_PROJECT_NAME"),
    Check::non_empty("COMPOSE_FILE"),
];
const SWARM_VARS: &[Check] = &[
    Check::non_empty("DOCKER_SWARM"),
    Check::non_empty("SWARM_NODE_ID"),
];

/// Container classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerInfo {
    pub docker: bool,
    pub kubernetes: bool,
    pub compose: bool,
    pub swarm: bool,
}

impl ContainerInfo {
    /// Detect container runtimes from variables and marker files.
    pub fn detect(env: &EnvVars, platform: Platform, files: &dyn FileProbe) -> Self {
        let docker = any_match(DOCKER_VARS, env)
            || files.exists(Path::new(DOCKER_MARKER))
            || (platform == Platform::Linux && cgroup_mentions_docker(files));

        Self {
            docker,
            kubernetes: any_match(KUBERNETES_VARS, env),
            compose: any_match(COMPOSE_VARS, env),
            swarm: any_match(SWARM_VARS, env),
        }
    }

    /// True if any container runtime was detected.
    pub fn is_containerized(&self) -> bool {
        self.docker || self.kubernetes || self.compose || self.swarm
    }

    /// Names of the detected runtimes.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.docker, "docker"),
            (self.kubernetes, "kubernetes"),
            (self.compose, "compose"),
            (self.swarm, "swarm"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

fn cgroup_mentions_docker(files: &dyn FileProbe) -> bool {
    files
        .read_to_string(Path::new(CGROUP_FILE))
        .is_some_and(|content| content.contains("docker"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeFs {
        cgroup: Option<&'static str>,
    }

    impl FileProbe for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            path == Path::new(CGROUP_FILE) && self.cgroup.is_some()
        }

        fn read_to_string(&self, path: &Path) -> Option<String> {
            (path == Path::new(CGROUP_FILE))
                .then_some(self.cgroup)
                .flatten()
                .map(str::to_string)
        }
    }

    fn no_files(_: &Path) -> bool {
        false
    }

    fn detect(vars: &[(&str, &str)]) -> ContainerInfo {
        let env = EnvVars::from_pairs(vars.iter().copied());
        ContainerInfo::detect(&env, Platform::Linux, &no_files)
    }

    #[test]
    fn clean_env_is_not_containerized() {
        let info = detect(&[]);
        assert!(!info.is_containerized());
        assert!(info.names().is_empty());
    }

    #[test]
    fn docker_from_marker_file_only() {
        let env = EnvVars::new();
        let marker = |p: &Path| p == Path::new(DOCKER_MARKER);
        let info = ContainerInfo::detect(&env, Platform::Linux, &marker);
        assert!(info.docker);
        assert!(info.is_containerized());
        assert!(!info.kubernetes);
    }

    #[test]
    fn docker_from_variable() {
        assert!(detect(&[("DOCKER_CONTAINER", "1")]).docker);
        assert!(!detect(&[("DOCKER_CONTAINER", "")]).docker);
    }

    #[test]
    fn docker_from_cgroup_on_linux_only() {
        let env = EnvVars::new();
        let fs = FakeFs {
            cgroup: Some("12:cpu:/docker/4f2a9c"),
        };
        assert!(ContainerInfo::detect(&env, Platform::Linux, &fs).docker);
        assert!(!ContainerInfo::detect(&env, Platform::MacOS, &fs).docker);

        let fs = FakeFs {
            cgroup: Some("0::/init.scope"),
        };
        assert!(!ContainerInfo::detect(&env, Platform::Linux, &fs).docker);
    }

    #[test]
    fn kubernetes_compose_swarm_from_variables() {
        let info = detect(&[
            ("KUBERNETES_SERVICE_HOST", "10.0.0.1"),
            ("COMPOSE_PROJECT_NAME", "web"),
            ("SWARM_NODE_ID", "n1"),
        ]);
        assert!(info.kubernetes);
        assert!(info.compose);
        assert!(info.swarm);
        assert!(!info.docker);
        assert!(info.is_containerized());
        assert_eq!(info.names(), vec!["kubernetes", "compose", "swarm"]);
    }

    #[test]
    fn empty_kubernetes_host_is_ignored() {
        assert!(!detect(&[("KUBERNETES_SERVICE_HOST", "")]).kubernetes);
    }
}
