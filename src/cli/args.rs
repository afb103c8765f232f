//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::environment::EnvFlag;
use crate::report::ReportFormat;

/// envprobe - Detect the execution environment for tests and scripts.
#[derive(Debug, Parser)]
#[command(name = "envprobe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .envprobe.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the detected environment (default if no command specified)
    Detect(DetectArgs),

    /// Exit 0 if a single flag is true, 1 otherwise
    Check(CheckArgs),

    /// Write an environment report and scaffold report directories
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Flag to test
    #[arg(value_enum)]
    pub flag: EnvFlag,
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output directory (overrides report.output_dir)
    #[arg(long, env = "ENVPROBE_REPORT_DIR", value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Report format (overrides report.format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ReportFormat>,

    /// Extra directory to create (repeatable)
    #[arg(long = "dir", value_name = "NAME")]
    pub dirs: Vec<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["envprobe"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_parses_kebab_case_flag() {
        let cli = Cli::try_parse_from(["envprobe", "check", "azure-functions"]).unwrap();
        match cli.command {
            Some(Commands::Check(args)) => assert_eq!(args.flag, EnvFlag::AzureFunctions),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn check_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["envprobe", "check", "mainframe"]).is_err());
    }

    #[test]
    fn report_collects_repeated_dirs() {
        let cli = Cli::try_parse_from([
            "envprobe", "report", "--format", "JSON", "--dir", "a", "--dir", "b",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Report(args)) => {
                assert_eq!(args.format, Some(ReportFormat::Json));
                assert_eq!(args.dirs, vec![PathBuf::from("a"), PathBuf::from("b")]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["envprobe", "-q", "-v"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["envprobe", "detect", "--json", "--debug"]).unwrap();
        assert!(cli.debug);
    }
}
