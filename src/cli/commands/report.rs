//! The `envprobe report` command.

use std::path::PathBuf;

use crate::cli::args::ReportArgs;
use crate::error::Result;
use crate::report::ReportWriter;
use crate::ui::UserInterface;

use super::context::ProbeContext;
use super::dispatcher::{Command, CommandResult};

/// The report command implementation.
pub struct ReportCommand<'a> {
    context: &'a ProbeContext,
    args: ReportArgs,
}

impl<'a> ReportCommand<'a> {
    /// Create a new report command.
    pub fn new(context: &'a ProbeContext, args: ReportArgs) -> Self {
        Self { context, args }
    }

    fn output_dir(&self) -> PathBuf {
        let dir = self
            .args
            .out
            .as_deref()
            .unwrap_or(self.context.config().report.output_dir.as_path());
        self.context.resolve(dir)
    }

    fn extra_dirs(&self) -> Vec<PathBuf> {
        self.context
            .config()
            .report
            .directories
            .iter()
            .chain(&self.args.dirs)
            .map(|dir| self.context.resolve(dir))
            .collect()
    }
}

impl Command for ReportCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let format = self
            .args
            .format
            .unwrap_or(self.context.config().report.format);
        let writer = ReportWriter::new(self.output_dir());

        for dir in writer.scaffold(&self.extra_dirs())? {
            ui.detail(&format!("Ensured {}", dir.display()));
        }

        let snapshot = self.context.snapshot();
        let path = writer.write(&snapshot, format)?;
        ui.success(&format!("Wrote {}", path.display()));

        Ok(CommandResult::success())
    }
}
