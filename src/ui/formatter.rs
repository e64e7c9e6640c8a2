//! Pure formatting and output functions - no user interaction.

use console::style;

use crate::boundary::BoundaryWarning;

pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Final line of a failed run
pub fn display_fatal(message: &str) {
    eprintln!("{} {}", style("FATAL:").red().bold(), style(message).red());
}

pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), message);
}

/// Echo an external command before it runs
pub fn display_command(command_line: &str) {
    println!("{} {}", style("$").dim(), style(command_line).dim());
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}

/// Formats the version transition line, e.g. `current: 2024.06 / new version: 2024.06-0`
pub fn format_version_transition(current: &str, new_version: &str) -> String {
    format!("current: {} / new version: {}", current, new_version)
}

pub fn display_version_transition(current: &str, new_version: &str) {
    display_status(&format_version_transition(current, new_version));
}

pub fn display_branch(branch: &str, is_pull_request: bool) {
    if is_pull_request {
        display_status(&format!("currentBranch: {} (pull request)", branch));
    } else {
        display_status(&format!("currentBranch: {}", branch));
    }
}
