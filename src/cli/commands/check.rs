//! The `envprobe check` command.
//!
//! Exits 0 when the flag is true and 1 when it is false, so it can drive
//! shell conditionals: `envprobe check ci && npm run test:ci`.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProbeContext;
use super::dispatcher::{Command, CommandResult};

/// Exit code when the checked flag is false.
pub const FLAG_FALSE_EXIT_CODE: i32 = 1;

/// The check command implementation.
pub struct CheckCommand<'a> {
    context: &'a ProbeContext,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(context: &'a ProbeContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let snapshot = self.context.snapshot();
        let flag = self.args.flag;
        let value = flag.evaluate(&snapshot);

        ui.message(&format!("{}: {}", flag.name(), if value { "yes" } else { "no" }));

        if value {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(FLAG_FALSE_EXIT_CODE))
        }
    }
}
