use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use calver_bump::cli::{run_bump_workflow, BumpReport, CommitOutcome};
use calver_bump::config::{self, Config};
use calver_bump::manifest::DEFAULT_MANIFEST;
use calver_bump::process::{DryRunRunner, SystemRunner};
use calver_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "calver-bump",
    version,
    about = "Bump a calendar version, commit it, tag it and push from CI"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the commands instead of running them")]
    dry_run: bool,

    #[arg(
        long,
        default_value = DEFAULT_MANIFEST,
        help = "Manifest file relative to the working directory"
    )]
    manifest: String,
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            display_report(&report);
            ui::display_success("Version bumped!");
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ui::display_fatal("Failed to bump version");
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<BumpReport> {
    let file_config =
        config::load_file_config(args.config.as_deref()).context("Error loading config")?;
    let config = Config::from_env(&file_config).context("Error resolving configuration")?;

    let report = if args.dry_run {
        ui::display_status("Dry run: no command will be executed");
        run_bump_workflow(&config, &DryRunRunner, &args.manifest)
    } else {
        let runner = SystemRunner::new(&config.working_dir);
        run_bump_workflow(&config, &runner, &args.manifest)
    };

    report.with_context(|| format!("Bump in {} aborted", config.working_dir.display()))
}

fn display_report(report: &BumpReport) {
    if let CommitOutcome::Skipped(_) = report.target_commit {
        ui::display_status(&format!(
            "No version commit on '{}'",
            report.branch.current_branch
        ));
    }

    match &report.tag {
        Some(tag) => ui::display_success(&format!(
            "{} -> {} tagged {} on {}",
            report.previous_version, report.new_version, tag, report.branch.current_branch
        )),
        None => ui::display_success(&format!(
            "{} -> {} pushed to {} (tag skipped)",
            report.previous_version, report.new_version, report.branch.current_branch
        )),
    }
}
