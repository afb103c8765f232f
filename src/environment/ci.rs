//! CI provider detection.
//!
//! Providers are evaluated from [`CI_PROVIDERS`] in table order, which is
//! also the tie-break priority when several providers' variables are set at
//! once:
//!
//! 1. Built-in providers, in table order (GitHub first)
//! 2. Custom providers from config (alphabetical by name)
//! 3. Generic CI variables (`CI`, `CONTINUOUS_INTEGRATION`, ...)

use std::collections::BTreeMap;

use serde::Serialize;

use super::rules::{any_match, Check, DetectRule};
use super::source::EnvVars;

/// A built-in CI provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CiProvider {
    GitHubActions,
    Jenkins,
    GitLab,
    CircleCi,
    Travis,
    AzurePipelines,
    TeamCity,
    Bitbucket,
    AppVeyor,
    Drone,
    Buddy,
    Buildkite,
    CodeBuild,
}

impl CiProvider {
    /// Short machine name ("github", "jenkins", ...).
    pub fn name(&self) -> &'static str {
        match self {
            Self::GitHubActions => "github",
            Self::Jenkins => "jenkins",
            Self::GitLab => "gitlab",
            Self::CircleCi => "circleci",
            Self::Travis => "travis",
            Self::AzurePipelines => "azure-pipelines",
            Self::TeamCity => "teamcity",
            Self::Bitbucket => "bitbucket",
            Self::AppVeyor => "appveyor",
            Self::Drone => "drone",
            Self::Buddy => "buddy",
            Self::Buildkite => "buildkite",
            Self::CodeBuild => "codebuild",
        }
    }

    /// Human-readable provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::GitHubActions => "GitHub Actions",
            Self::Jenkins => "Jenkins",
            Self::GitLab => "GitLab CI",
            Self::CircleCi => "CircleCI",
            Self::Travis => "Travis CI",
            Self::AzurePipelines => "Azure Pipelines",
            Self::TeamCity => "TeamCity",
            Self::Bitbucket => "Bitbucket Pipelines",
            Self::AppVeyor => "AppVeyor",
            Self::Drone => "Drone",
            Self::Buddy => "Buddy",
            Self::Buildkite => "Buildkite",
            Self::CodeBuild => "AWS CodeBuild",
        }
    }

    /// Report key for this provider's boolean ("isGitHubActions", ...).
    pub fn flag_name(&self) -> &'static str {
        match self {
            Self::GitHubActions => "isGitHubActions",
            Self::Jenkins => "isJenkins",
            Self::GitLab => "isGitLab",
            Self::CircleCi => "isCircleCI",
            Self::Travis => "isTravis",
            Self::AzurePipelines => "isAzurePipelines",
            Self::TeamCity => "isTeamCity",
            Self::Bitbucket => "isBitbucket",
            Self::AppVeyor => "isAppVeyor",
            Self::Drone => "isDrone",
            Self::Buddy => "isBuddy",
            Self::Buildkite => "isBuildkite",
            Self::CodeBuild => "isCodeBuild",
        }
    }

    /// Look up a provider by its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        CI_PROVIDERS
            .iter()
            .map(|rule| rule.provider)
            .find(|p| p.name() == name)
    }

    /// The detection checks for this provider.
    pub fn checks(&self) -> &'static [Check] {
        CI_PROVIDERS
            .iter()
            .find(|rule| rule.provider == *self)
            .map(|rule| rule.any_of)
            .unwrap_or(&[])
    }
}

/// One row of the provider table.
#[derive(Debug, Clone, Copy)]
pub struct ProviderRule {
    pub provider: CiProvider,
    /// The provider is present if any of these hold.
    pub any_of: &'static [Check],
}

/// Built-in providers in priority order.
pub const CI_PROVIDERS: &[ProviderRule] = &[
    ProviderRule {
        provider: CiProvider::GitHubActions,
        any_of: &[Check::equals("GITHUB_ACTIONS", "true")],
    },
    ProviderRule {
        provider: CiProvider::Jenkins,
        any_of: &[Check::non_empty("JENKINS_URL"), Check::non_empty("HUDSON_URL")],
    },
    ProviderRule {
        provider: CiProvider::GitLab,
        any_of: &[Check::equals("GITLAB_CI", "true")],
    },
    ProviderRule {
        provider: CiProvider::CircleCi,
        any_of: &[Check::equals("CIRCLECI", "true")],
    },
    ProviderRule {
        provider: CiProvider::Travis,
        any_of: &[Check::equals("TRAVIS", "true")],
    },
    ProviderRule {
        provider: CiProvider::AzurePipelines,
        any_of: &[
            Check::equals("TF_BUILD", "True"),
            Check::non_empty("SYSTEM_TEAMFOUNDATIONCOLLECTIONURI"),
        ],
    },
    ProviderRule {
        provider: CiProvider::TeamCity,
        any_of: &[Check::non_empty("TEAMCITY_VERSION")],
    },
    ProviderRule {
        provider: CiProvider::Bitbucket,
        any_of: &[Check::non_empty("BITBUCKET_BUILD_NUMBER")],
    },
    ProviderRule {
        provider: CiProvider::AppVeyor,
        any_of: &[Check::equals_ignore_case("APPVEYOR", "true")],
    },
    ProviderRule {
        provider: CiProvider::Drone,
        any_of: &[Check::equals("DRONE", "true")],
    },
    ProviderRule {
        provider: CiProvider::Buddy,
        any_of: &[
            Check::equals("BUDDY", "true"),
            Check::non_empty("BUDDY_WORKSPACE_ID"),
        ],
    },
    ProviderRule {
        provider: CiProvider::Buildkite,
        any_of: &[Check::equals("BUILDKITE", "true")],
    },
    ProviderRule {
        provider: CiProvider::CodeBuild,
        any_of: &[Check::non_empty("CODEBUILD_BUILD_ID")],
    },
];

/// Provider-independent CI signals.
pub const GENERIC_CI: &[Check] = &[
    Check::enabled("CI"),
    Check::enabled("CONTINUOUS_INTEGRATION"),
    Check::non_empty("BUILD_NUMBER"),
    Check::non_empty("RUN_ID"),
];

/// The provider that wins the priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CiMatch {
    /// A built-in provider.
    Builtin(CiProvider),
    /// A provider defined in config.
    Custom(String),
    /// Only a generic CI variable was set.
    Generic,
}

impl CiMatch {
    /// Short machine name.
    pub fn name(&self) -> &str {
        match self {
            Self::Builtin(p) => p.name(),
            Self::Custom(name) => name,
            Self::Generic => "generic",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Builtin(p) => p.display_name(),
            Self::Custom(name) => name,
            Self::Generic => "generic CI",
        }
    }
}

/// CI classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiInfo {
    /// Built-in providers whose rule matched, in priority order.
    pub providers: Vec<CiProvider>,
    /// Custom providers whose rule matched, alphabetical.
    pub custom: Vec<String>,
    /// A generic CI variable was set.
    pub generic: bool,
}

impl CiInfo {
    /// Evaluate the provider table plus custom rules.
    pub fn detect(env: &EnvVars, custom_rules: &BTreeMap<String, Vec<DetectRule>>) -> Self {
        let providers = CI_PROVIDERS
            .iter()
            .filter(|rule| any_match(rule.any_of, env))
            .map(|rule| rule.provider)
            .collect();

        let custom = custom_rules
            .iter()
            .filter(|(_, rules)| rules.iter().any(|rule| rule.matches(env)))
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            providers,
            custom,
            generic: any_match(GENERIC_CI, env),
        }
    }

    /// True if any provider-specific or generic signal is present.
    pub fn is_ci(&self) -> bool {
        self.generic || !self.providers.is_empty() || !self.custom.is_empty()
    }

    /// True if the given built-in provider was detected.
    pub fn is_provider(&self, provider: CiProvider) -> bool {
        self.providers.contains(&provider)
    }

    /// The single provider chosen by the priority order.
    pub fn provider(&self) -> Option<CiMatch> {
        if let Some(p) = self.providers.first() {
            return Some(CiMatch::Builtin(*p));
        }
        if let Some(name) = self.custom.first() {
            return Some(CiMatch::Custom(name.clone()));
        }
        self.generic.then_some(CiMatch::Generic)
    }

    /// Number of distinct providers (built-in and custom) detected.
    pub fn provider_count(&self) -> usize {
        self.providers.len() + self.custom.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(vars: &[(&str, &str)]) -> CiInfo {
        CiInfo::detect(&EnvVars::from_pairs(vars.iter().copied()), &BTreeMap::new())
    }

    #[test]
    fn nothing_in_clean_env() {
        let ci = detect(&[]);
        assert!(!ci.is_ci());
        assert!(ci.provider().is_none());
    }

    #[test]
    fn each_table_row_detects_its_provider() {
        let cases: &[(CiProvider, &[(&str, &str)])] = &[
            (CiProvider::GitHubActions, &[("GITHUB_ACTIONS", "true")]),
            (CiProvider::Jenkins, &[("JENKINS_URL", "http://ci.example.com")]),
            (CiProvider::Jenkins, &[("HUDSON_URL", "http://ci.example.com")]),
            (CiProvider::GitLab, &[("GITLAB_CI", "true")]),
            (CiProvider::CircleCi, &[("CIRCLECI", "true")]),
            (CiProvider::Travis, &[("TRAVIS", "true")]),
            (CiProvider::AzurePipelines, &[("TF_BUILD", "True")]),
            (
                CiProvider::AzurePipelines,
                &[("SYSTEM_TEAMFOUNDATIONCOLLECTIONURI", "https://dev.azure.com/x/")],
            ),
            (CiProvider::TeamCity, &[("TEAMCITY_VERSION", "2023.11")]),
            (CiProvider::Bitbucket, &[("BITBUCKET_BUILD_NUMBER", "42")]),
            (CiProvider::AppVeyor, &[("APPVEYOR", "True")]),
            (CiProvider::Drone, &[("DRONE", "true")]),
            (CiProvider::Buddy, &[("BUDDY_WORKSPACE_ID", "123")]),
            (CiProvider::Buildkite, &[("BUILDKITE", "true")]),
            (CiProvider::CodeBuild, &[("CODEBUILD_BUILD_ID", "proj:abc")]),
        ];

        for (provider, vars) in cases {
            let ci = detect(vars);
            assert!(ci.is_provider(*provider), "{provider:?} from {vars:?}");
            assert!(ci.is_ci());
            assert_eq!(ci.provider(), Some(CiMatch::Builtin(*provider)));
        }
    }

    #[test]
    fn tf_build_must_be_capitalised_true() {
        let ci = detect(&[("TF_BUILD", "false")]);
        assert!(!ci.is_provider(CiProvider::AzurePipelines));
        assert!(!ci.is_ci());
    }

    #[test]
    fn github_actions_requires_literal_true() {
        let ci = detect(&[("GITHUB_ACTIONS", "1")]);
        assert!(!ci.is_provider(CiProvider::GitHubActions));
    }

    #[test]
    fn github_beats_generic() {
        let ci = detect(&[("GITHUB_ACTIONS", "true"), ("CI", "true")]);
        assert!(ci.generic);
        assert_eq!(ci.provider(), Some(CiMatch::Builtin(CiProvider::GitHubActions)));
        assert_eq!(ci.provider().unwrap().name(), "github");
    }

    #[test]
    fn table_order_breaks_ties() {
        let ci = detect(&[
            ("BUILDKITE", "true"),
            ("JENKINS_URL", "http://jenkins"),
            ("GITLAB_CI", "true"),
        ]);
        assert_eq!(
            ci.providers,
            vec![CiProvider::Jenkins, CiProvider::GitLab, CiProvider::Buildkite]
        );
        assert_eq!(ci.provider(), Some(CiMatch::Builtin(CiProvider::Jenkins)));
        assert_eq!(ci.provider_count(), 3);
    }

    #[test]
    fn generic_only() {
        let ci = detect(&[("CI", "1")]);
        assert!(ci.is_ci());
        assert!(ci.providers.is_empty());
        assert_eq!(ci.provider(), Some(CiMatch::Generic));
    }

    #[test]
    fn ci_false_is_not_ci() {
        assert!(!detect(&[("CI", "false")]).is_ci());
        assert!(!detect(&[("CI", "0")]).is_ci());
    }

    #[test]
    fn build_number_counts_as_generic() {
        assert!(detect(&[("BUILD_NUMBER", "17")]).generic);
        assert!(detect(&[("RUN_ID", "abc")]).generic);
        assert!(detect(&[("CONTINUOUS_INTEGRATION", "true")]).generic);
    }

    #[test]
    fn custom_rules_rank_after_builtins_and_before_generic() {
        let mut custom = BTreeMap::new();
        custom.insert(
            "woodpecker".to_string(),
            vec![DetectRule::equals("CI_SYSTEM_NAME", "woodpecker")],
        );
        let env = EnvVars::from_pairs([("CI_SYSTEM_NAME", "woodpecker"), ("CI", "true")]);
        let ci = CiInfo::detect(&env, &custom);
        assert_eq!(ci.provider(), Some(CiMatch::Custom("woodpecker".to_string())));

        let env = EnvVars::from_pairs([
            ("CI_SYSTEM_NAME", "woodpecker"),
            ("GITHUB_ACTIONS", "true"),
        ]);
        let ci = CiInfo::detect(&env, &custom);
        assert_eq!(ci.provider(), Some(CiMatch::Builtin(CiProvider::GitHubActions)));
        assert_eq!(ci.custom, vec!["woodpecker".to_string()]);
    }

    #[test]
    fn custom_provider_alone_makes_ci() {
        let mut custom = BTreeMap::new();
        custom.insert("preview".to_string(), vec![DetectRule::present("PREVIEW")]);
        let ci = CiInfo::detect(&EnvVars::from_pairs([("PREVIEW", "1")]), &custom);
        assert!(ci.is_ci());
        assert!(!ci.generic);
    }

    #[test]
    fn custom_rules_alphabetical_ordering() {
        let mut custom = BTreeMap::new();
        custom.insert("beta".to_string(), vec![DetectRule::present("BETA")]);
        custom.insert("alpha".to_string(), vec![DetectRule::present("ALPHA")]);
        let env = EnvVars::from_pairs([("ALPHA", "1"), ("BETA", "1")]);
        let ci = CiInfo::detect(&env, &custom);
        assert_eq!(ci.provider().unwrap().name(), "alpha");
    }

    #[test]
    fn provider_names_round_trip() {
        for rule in CI_PROVIDERS {
            assert_eq!(CiProvider::from_name(rule.provider.name()), Some(rule.provider));
            assert!(!rule.provider.checks().is_empty());
        }
        assert_eq!(CiProvider::from_name("generic"), None);
    }

    #[test]
    fn flag_names_are_unique() {
        let mut names: Vec<_> = CI_PROVIDERS.iter().map(|r| r.provider.flag_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CI_PROVIDERS.len());
    }
}
