use std::fmt;

/// Non-fatal conditions hit while bumping.
/// These are reported to the user and the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The commit on the target branch failed, usually because the checkout
    /// left nothing to commit
    TargetCommitSkipped { branch: String, reason: String },
    /// The patch segment of the current version is not a number
    NonNumericPatch { version: String, segment: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::TargetCommitSkipped { branch, reason } => {
                let first_line = reason.lines().next().unwrap_or_default();
                write!(
                    f,
                    "git commit on branch '{}' failed ({}); this commit is only needed \
                     when the checkout leaves the version change uncommitted, continuing",
                    branch, first_line
                )
            }
            BoundaryWarning::NonNumericPatch { version, segment } => {
                write!(
                    f,
                    "Patch segment '{}' of version '{}' is not a number; the new patch will be NaN",
                    segment, version
                )
            }
        }
    }
}
