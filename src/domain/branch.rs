use std::sync::OnceLock;

use regex::Regex;

use crate::error::{BumpError, Result};

const REF_PATTERN: &str = r"refs/[a-zA-Z]+/(.*)";

fn ref_regex() -> Option<&'static Regex> {
    static REF_RE: OnceLock<Option<Regex>> = OnceLock::new();
    REF_RE.get_or_init(|| Regex::new(REF_PATTERN).ok()).as_ref()
}

/// Branch the bump is committed and pushed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub current_branch: String,
    pub is_pull_request: bool,
}

/// Extract the branch (or tag) name from a ref such as `refs/heads/main`.
///
/// The pattern is not anchored, matching how CI refs were historically
/// parsed, so `refs/pull/12/merge` yields `12/merge`.
pub fn parse_ref(git_ref: &str) -> Result<String> {
    ref_regex()
        .and_then(|re| re.captures(git_ref))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| {
            BumpError::ref_parse(format!(
                "Ref '{}' does not match refs/<type>/<name>",
                git_ref
            ))
        })
}

impl BranchContext {
    /// Resolve the target branch.
    ///
    /// Precedence: `target_override` > `head_ref` > branch parsed from `git_ref`.
    /// The ref is always parsed first, so a malformed ref fails even when an
    /// override is present.
    pub fn resolve(
        git_ref: Option<&str>,
        head_ref: Option<&str>,
        target_override: Option<&str>,
    ) -> Result<Self> {
        let git_ref = git_ref.ok_or_else(|| BumpError::ref_parse("No ref provided"))?;

        let mut context = BranchContext {
            current_branch: parse_ref(git_ref)?,
            is_pull_request: false,
        };

        if let Some(head) = head_ref {
            context.current_branch = head.to_string();
            context.is_pull_request = true;
        }

        if let Some(target) = target_override {
            context.current_branch = target.to_string();
        }

        Ok(context)
    }
}
