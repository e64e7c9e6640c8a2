use crate::error::Result;
use crate::process::{CommandOutput, CommandRunner, Invocation};

/// Typed wrapper around the `git` command line.
///
/// Each method maps to exactly one `git` invocation and is attempted once.
pub struct GitCli<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> GitCli<'a, R> {
    pub fn new(runner: &'a R) -> Self {
        GitCli { runner }
    }

    fn git<I, S>(&self, args: I) -> Result<CommandOutput>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.runner.run(&Invocation::new("git", args))
    }

    /// Set a repository config value.
    ///
    /// The value is wrapped in literal double quotes, which git stores as
    /// part of the value.
    pub fn config_quoted(&self, key: &str, value: &str) -> Result<()> {
        self.git(["config".to_string(), key.to_string(), format!("\"{}\"", value)])?;
        Ok(())
    }

    /// Commit all tracked changes (`git commit -a -m <message>`)
    pub fn commit_all(&self, message: &str) -> Result<()> {
        self.git(["commit", "-a", "-m", message])?;
        Ok(())
    }

    /// Fetch every ref from the default remote
    pub fn fetch(&self) -> Result<()> {
        self.git(["fetch"])?;
        Ok(())
    }

    pub fn checkout(&self, branch: &str) -> Result<()> {
        self.git(["checkout", branch])?;
        Ok(())
    }

    /// Create a lightweight tag on HEAD
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(["tag", name])?;
        Ok(())
    }

    /// Push the current branch to `remote_url`
    pub fn push(&self, remote_url: &str) -> Result<()> {
        self.git(["push", remote_url])?;
        Ok(())
    }

    /// Push commits plus annotated tags reachable from them
    pub fn push_follow_tags(&self, remote_url: &str) -> Result<()> {
        self.git(["push", remote_url, "--follow-tags"])?;
        Ok(())
    }

    /// Push all tags
    pub fn push_tags(&self, remote_url: &str) -> Result<()> {
        self.git(["push", remote_url, "--tags"])?;
        Ok(())
    }
}

/// Build the authenticated HTTPS push URL: `https://<actor>:<token>@<host>/<repository>.git`
pub fn remote_url(actor: &str, token: &str, host: &str, repository: &str) -> String {
    format!("https://{}:{}@{}/{}.git", actor, token, host, repository)
}
