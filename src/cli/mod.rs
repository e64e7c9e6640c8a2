pub mod orchestration;

pub use orchestration::{run_bump_workflow, BumpReport, CommitOutcome, VersionBumpWorkflow};
