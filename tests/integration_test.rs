// tests/integration_test.rs
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calver-bump"))
}

#[test]
fn test_calver_bump_help() {
    let output = bin().arg("--help").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("calver-bump"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_calver_bump_version() {
    let output = bin().arg("--version").output().expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_credentials_fails_with_fatal_message() {
    let dir = tempfile::tempdir().unwrap();
    let output = bin()
        .current_dir(dir.path())
        .env_remove("GITHUB_ACTOR")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GITHUB_REPOSITORY")
        .env_remove("GITHUB_WORKSPACE")
        .env_remove("PACKAGEJSON_DIR")
        .arg("--dry-run")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to bump version"));
}

#[cfg(test)]
mod dry_run_tests {
    use super::*;
    use tempfile::TempDir;

    fn workspace(version: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("package.json"),
            format!(r#"{{ "name": "app", "version": "{}" }}"#, version),
        )
        .unwrap();
        dir
    }

    fn dry_run(dir: &TempDir, extra_env: &[(&str, &str)]) -> std::process::Output {
        let mut cmd = bin();
        cmd.current_dir(dir.path())
            .env("GITHUB_WORKSPACE", dir.path())
            .env_remove("PACKAGEJSON_DIR")
            .env_remove("INPUT_SKIP-TAG")
            .env_remove("INPUT_TARGET-BRANCH")
            .env_remove("INPUT_TAG-PREFIX")
            .env_remove("INPUT_COMMIT-MESSAGE")
            .env_remove("GITHUB_SERVER_URL")
            .env("GITHUB_ACTOR", "octocat")
            .env("GITHUB_TOKEN", "ghp_supersecret")
            .env("GITHUB_REPOSITORY", "octo/app")
            .env("GITHUB_REF", "refs/heads/main")
            .env("GITHUB_HEAD_REF", "")
            .arg("--config")
            .arg(dir.path().join("no-config.toml"))
            .arg("--dry-run");
        for (key, value) in extra_env {
            cmd.env(key, value);
        }
        cmd.output().expect("Failed to execute command")
    }

    fn write_empty_config(dir: &TempDir) {
        std::fs::write(dir.path().join("no-config.toml"), "").unwrap();
    }

    #[test]
    fn test_dry_run_end_to_end() {
        let dir = workspace("2024.06");
        write_empty_config(&dir);

        let output = dry_run(&dir, &[]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(stdout.contains("current: 2024.06 / new version: 2024.06-0"));
        assert!(stdout.contains("git tag 2024.06-0"));
        assert!(stdout.contains("--follow-tags"));
        assert!(stdout.contains("--tags"));
        assert!(stdout.contains("Version bumped!"));
        assert!(!stdout.contains("ghp_supersecret"));
    }

    #[test]
    fn test_dry_run_skip_tag() {
        let dir = workspace("2024.06-3");
        write_empty_config(&dir);

        let output = dry_run(&dir, &[("INPUT_SKIP-TAG", "true")]);
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(output.status.success());
        assert!(!stdout.contains("git tag"));
        assert!(!stdout.contains("--follow-tags"));
        assert!(stdout.contains("Version bumped!"));
    }

    #[test]
    fn test_dry_run_bad_ref_fails() {
        let dir = workspace("2024.06");
        write_empty_config(&dir);

        let output = dry_run(&dir, &[("GITHUB_REF", "main")]);

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Ref parse error"));
        assert!(stderr.contains("Failed to bump version"));
    }
}
