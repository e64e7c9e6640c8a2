use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner, Invocation};
use crate::ui;

/// Prints each command instead of running it
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        ui::display_command(&format!("{} (dry run)", invocation.display_line()));
        Ok(CommandOutput::default())
    }
}
