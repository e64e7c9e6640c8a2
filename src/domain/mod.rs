//! Domain logic - pure version and branch rules independent of external tools

pub mod branch;
pub mod commit;
pub mod tag;
pub mod version;

pub use branch::BranchContext;
pub use commit::CommitTemplate;
pub use tag::Tag;
pub use version::{BumpedPatch, CalVersion, Patch};
