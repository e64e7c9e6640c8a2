/// Placeholder substituted with the new version in commit message templates
pub const VERSION_PLACEHOLDER: &str = "{{version}}";

/// Default commit message for the target-branch commit
pub const DEFAULT_COMMIT_MESSAGE: &str = "ci: version bump to {{version}}";

/// Message of the commit on the working ref, quotes included
pub const WORKING_REF_COMMIT_MESSAGE: &str = "\"test commit\"";

/// Commit message template (e.g., "release {{version}}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitTemplate {
    pub template: String,
}

impl CommitTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        CommitTemplate {
            template: template.into(),
        }
    }

    /// Replace every `{{version}}` occurrence with `version`
    pub fn render(&self, version: &str) -> String {
        self.template.replace(VERSION_PLACEHOLDER, version)
    }
}

impl Default for CommitTemplate {
    fn default() -> Self {
        CommitTemplate::new(DEFAULT_COMMIT_MESSAGE)
    }
}
