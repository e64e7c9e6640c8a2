use crate::error::Result;
use crate::process::{CommandRunner, Invocation};

/// Wrapper around the `npm` package tool
pub struct Npm<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> Npm<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        Npm { runner }
    }

    /// Write `version` into the manifest without creating a git tag.
    ///
    /// Re-setting the version already in the manifest is allowed.
    pub fn stamp_version(&self, version: &str) -> Result<()> {
        self.runner.run(&Invocation::new(
            "npm",
            [
                "version",
                "--allow-same-version=true",
                "--git-tag-version=false",
                version,
            ],
        ))?;
        Ok(())
    }
}
