//! Version bump workflow orchestration
//!
//! Runs the whole bump as one linear sequence of external commands. Each
//! step waits for the previous one; later steps depend on the files and refs
//! earlier steps leave behind, so the order is fixed.

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::commit::WORKING_REF_COMMIT_MESSAGE;
use crate::domain::{BranchContext, CalVersion, Patch, Tag};
use crate::error::{BumpError, Result};
use crate::git_ops::{remote_url, GitCli};
use crate::manifest::Manifest;
use crate::npm::Npm;
use crate::process::CommandRunner;
use crate::ui;

/// Outcome of the commit on the target branch, the one command allowed to fail
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Committed,
    Skipped(BoundaryWarning),
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReport {
    /// Version read from the manifest
    pub previous_version: String,

    /// Bumped version used for the commit message and tag
    pub new_version: String,

    /// Branch the bump was committed on and pushed from
    pub branch: BranchContext,

    /// Tag created, `None` when tagging is skipped
    pub tag: Option<Tag>,

    pub target_commit: CommitOutcome,

    /// Every non-fatal condition reported during the run
    pub warnings: Vec<BoundaryWarning>,
}

/// The bump pipeline bound to a configuration and a command runner
pub struct VersionBumpWorkflow<'a, R: CommandRunner> {
    config: &'a Config,
    runner: &'a R,
}

impl<'a, R: CommandRunner> VersionBumpWorkflow<'a, R> {
    pub fn new(config: &'a Config, runner: &'a R) -> Self {
        VersionBumpWorkflow { config, runner }
    }

    /// Run every step against an already loaded manifest.
    ///
    /// 1. Compute the new version from the manifest version
    /// 2. Resolve the target branch
    /// 3. Configure the git identity
    /// 4. Stamp the current version and commit on the working ref
    /// 5. Fetch (pull requests only) and check out the target branch
    /// 6. Stamp again and commit with the configured message (failure tolerated)
    /// 7. Tag and push, or push only when tagging is skipped
    pub fn run(&self, manifest: &Manifest) -> Result<BumpReport> {
        let config = self.config;
        let mut warnings = Vec::new();

        let current = manifest.version.as_str();
        let parsed = CalVersion::parse(current);
        if let Patch::Invalid(segment) = &parsed.patch {
            let warning = BoundaryWarning::NonNumericPatch {
                version: current.to_string(),
                segment: segment.clone(),
            };
            ui::display_boundary_warning(&warning);
            warnings.push(warning);
        }
        let new_version = parsed.bump();

        let branch = BranchContext::resolve(
            config.git_ref.as_deref(),
            config.head_ref.as_deref(),
            config.target_branch.as_deref(),
        )?;
        let commit_message = config.commit_message.render(&new_version);

        ui::display_branch(&branch.current_branch, branch.is_pull_request);
        ui::display_version_transition(current, &new_version);
        ui::display_status(&commit_message);

        let git = GitCli::new(self.runner);
        let npm = Npm::new(self.runner);

        git.config_quoted("user.name", &config.git_user)?;
        git.config_quoted("user.email", &config.git_email)?;

        // The manifest keeps the current version on both commits; only the
        // tag and commit message carry the new one.
        npm.stamp_version(current)?;
        git.commit_all(WORKING_REF_COMMIT_MESSAGE)?;

        if branch.is_pull_request {
            git.fetch()?;
        }
        git.checkout(&branch.current_branch)?;
        npm.stamp_version(current)?;

        let target_commit = match git.commit_all(&commit_message) {
            Ok(()) => CommitOutcome::Committed,
            Err(e) if e.is_command_failure() => {
                let warning = BoundaryWarning::TargetCommitSkipped {
                    branch: branch.current_branch.clone(),
                    reason: failure_summary(&e),
                };
                ui::display_boundary_warning(&warning);
                warnings.push(warning.clone());
                CommitOutcome::Skipped(warning)
            }
            Err(e) => return Err(e),
        };

        let url = remote_url(
            &config.actor,
            &config.token,
            &config.remote_host,
            &config.repository,
        );

        let tag = if config.skip_tag {
            git.push(&url)?;
            None
        } else {
            let tag = Tag::for_version(&config.tag_prefix, &new_version);
            git.tag(&tag.name)?;
            git.push_follow_tags(&url)?;
            git.push_tags(&url)?;
            ui::display_success(&format!("Pushed tag: {}", tag));
            Some(tag)
        };

        Ok(BumpReport {
            previous_version: current.to_string(),
            new_version,
            branch,
            tag,
            target_commit,
            warnings,
        })
    }
}

/// Load `manifest_name` from the configured working directory and run the workflow
pub fn run_bump_workflow<R: CommandRunner>(
    config: &Config,
    runner: &R,
    manifest_name: &str,
) -> Result<BumpReport> {
    let manifest = Manifest::load(config.working_dir.join(manifest_name))?;
    VersionBumpWorkflow::new(config, runner).run(&manifest)
}

/// Short reason for a failed command: stderr, else stdout, else the error itself.
/// git reports "nothing to commit" on stdout.
fn failure_summary(error: &BumpError) -> String {
    if let BumpError::Command { stdout, stderr, .. } = error {
        for stream in [stderr, stdout] {
            let trimmed = stream.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    error.to_string()
}
