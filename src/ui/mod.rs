//! User-facing console output.
//!
//! The bump runs unattended in CI, so there are no prompts; everything here
//! writes status lines. `formatter` holds the styled output helpers.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_branch, display_command, display_error, display_fatal,
    display_status, display_success, display_version_transition, display_warning,
    format_version_transition,
};
