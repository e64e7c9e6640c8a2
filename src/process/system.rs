use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{BumpError, Result};
use crate::process::{redact_credentials, CommandOutput, CommandRunner, Invocation};
use crate::ui;

/// Runs commands with the system executables inside a working directory
pub struct SystemRunner {
    working_dir: PathBuf,
}

impl SystemRunner {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        SystemRunner {
            working_dir: working_dir.into(),
        }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl CommandRunner for SystemRunner {
    /// Spawn the command and wait for it.
    ///
    /// Output is captured; a non-zero exit code becomes a `BumpError::Command`
    /// carrying the redacted command line and both output streams.
    fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        let line = invocation.display_line();
        ui::display_command(&line);

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|e| BumpError::command(&line, -1, "", e.to_string()))?;

        let stdout = redact_credentials(&String::from_utf8_lossy(&output.stdout));
        let stderr = redact_credentials(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            return Err(BumpError::command(
                line,
                output.status.code().unwrap_or(-1),
                stdout,
                stderr,
            ));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}
