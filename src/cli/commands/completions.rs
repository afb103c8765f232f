//! The `envprobe completions` command.

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::{EnvProbeError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints a shell completion script.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    /// Render the completion script for the requested shell.
    pub fn script(&self) -> Result<String> {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, bin_name, &mut buf);
        String::from_utf8(buf).map_err(|e| EnvProbeError::Other(e.into()))
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&self.script()?);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use clap_complete::Shell;

    fn run(shell: Shell, mode: OutputMode) -> MockUI {
        let mut ui = MockUI::with_mode(mode);
        let result = CompletionsCommand::new(CompletionsArgs { shell })
            .execute(&mut ui)
            .unwrap();
        assert!(result.success);
        ui
    }

    #[test]
    fn bash_script_lists_subcommands() {
        let script = run(Shell::Bash, OutputMode::Normal).output_text();
        assert!(script.contains("complete"));
        for sub in ["detect", "check", "report", "completions"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }

    #[test]
    fn check_flags_are_completed() {
        let script = run(Shell::Zsh, OutputMode::Normal).output_text();
        assert!(script.contains("azure-functions"));
    }

    #[test]
    fn script_is_printed_in_quiet_mode() {
        let ui = run(Shell::Fish, OutputMode::Quiet);
        assert!(ui.output_text().contains("envprobe"));
        assert!(ui.messages().is_empty());
    }
}
