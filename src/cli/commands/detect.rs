//! The `envprobe detect` command.

use crate::cli::args::DetectArgs;
use crate::environment::{CiMatch, Lifecycle};
use crate::error::Result;
use crate::report::{JsonFormatter, ReportFormatter, TextFormatter};
use crate::ui::UserInterface;

use super::context::ProbeContext;
use super::dispatcher::{Command, CommandResult};

/// The detect command implementation.
pub struct DetectCommand<'a> {
    context: &'a ProbeContext,
    args: DetectArgs,
}

impl<'a> DetectCommand<'a> {
    /// Create a new detect command.
    pub fn new(context: &'a ProbeContext, args: DetectArgs) -> Self {
        Self { context, args }
    }
}

impl Command for DetectCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = self.context.snapshot();

        let rendered = if self.args.json {
            JsonFormatter::new().format_to_string(&snapshot)?
        } else {
            TextFormatter::new(ui.supports_color()).format_to_string(&snapshot)?
        };
        ui.output(&rendered);

        let lifecycle_var = &self.context.config().lifecycle_var;
        ui.detail(&format!("Lifecycle read from {}", lifecycle_var));
        if let Some(raw) = self.context.var(lifecycle_var) {
            if !raw.is_empty() && raw.parse::<Lifecycle>().is_err() {
                ui.warning(&format!(
                    "{}={:?} is not a known lifecycle stage; treating it as {}",
                    lifecycle_var,
                    raw,
                    Lifecycle::default()
                ));
            }
        }
        if snapshot.ci.provider_count() > 1 {
            let matched: Vec<String> = snapshot
                .ci
                .providers
                .iter()
                .map(|p| p.name().to_string())
                .chain(snapshot.ci.custom.iter().cloned())
                .collect();
            ui.detail(&format!("CI providers matched: {}", matched.join(", ")));
        }
        if let Some(CiMatch::Generic) = snapshot.ci_provider() {
            ui.detail("CI detected from generic variables only");
        }

        Ok(CommandResult::success())
    }
}
