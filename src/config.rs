use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::commit::DEFAULT_COMMIT_MESSAGE;
use crate::domain::CommitTemplate;
use crate::error::{BumpError, Result};

/// Config file name looked up in the current directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "calver-bump.toml";

pub const DEFAULT_GIT_USER: &str = "Automated Version Bump";
pub const DEFAULT_GIT_EMAIL: &str = "gh-action-calver-bump-version@users.noreply.github.com";
pub const DEFAULT_REMOTE_HOST: &str = "github.com";

/// Environment variable names read during resolution
pub mod env {
    pub const WORKSPACE: &str = "GITHUB_WORKSPACE";
    pub const PACKAGE_DIR: &str = "PACKAGEJSON_DIR";
    pub const TAG_PREFIX: &str = "INPUT_TAG-PREFIX";
    pub const COMMIT_MESSAGE: &str = "INPUT_COMMIT-MESSAGE";
    pub const TARGET_BRANCH: &str = "INPUT_TARGET-BRANCH";
    pub const SKIP_TAG: &str = "INPUT_SKIP-TAG";
    pub const GIT_USER: &str = "GITHUB_USER";
    pub const GIT_EMAIL: &str = "GITHUB_EMAIL";
    pub const SERVER_URL: &str = "GITHUB_SERVER_URL";
    pub const ACTOR: &str = "GITHUB_ACTOR";
    pub const TOKEN: &str = "GITHUB_TOKEN";
    pub const REPOSITORY: &str = "GITHUB_REPOSITORY";
    pub const REF: &str = "GITHUB_REF";
    pub const HEAD_REF: &str = "GITHUB_HEAD_REF";
}

/// Optional defaults read from `calver-bump.toml`.
///
/// Every key is optional; environment variables take precedence.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub package_dir: Option<String>,

    #[serde(default)]
    pub tag_prefix: Option<String>,

    #[serde(default)]
    pub commit_message: Option<String>,

    #[serde(default)]
    pub target_branch: Option<String>,

    #[serde(default)]
    pub skip_tag: Option<bool>,

    #[serde(default)]
    pub git_user: Option<String>,

    #[serde(default)]
    pub git_email: Option<String>,

    #[serde(default)]
    pub remote_host: Option<String>,
}

/// Loads the config file or returns empty defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `calver-bump.toml` in current directory
/// 3. `calver-bump.toml` in the user config directory
/// 4. Empty configuration if no file found
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_file_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            candidate
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    let contents = fs::read_to_string(&path).map_err(|e| {
        BumpError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&contents)
        .map_err(|e| BumpError::config(format!("Cannot parse {}: {}", path.display(), e)))
}

/// Immutable settings for one bump run
#[derive(Clone, PartialEq)]
pub struct Config {
    /// Directory holding the manifest; every command runs here
    pub working_dir: PathBuf,
    pub tag_prefix: String,
    pub commit_message: CommitTemplate,
    pub target_branch: Option<String>,
    pub skip_tag: bool,
    pub git_user: String,
    pub git_email: String,
    pub remote_host: String,
    pub actor: String,
    pub token: String,
    pub repository: String,
    pub git_ref: Option<String>,
    /// Only set in pull-request context
    pub head_ref: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("working_dir", &self.working_dir)
            .field("tag_prefix", &self.tag_prefix)
            .field("commit_message", &self.commit_message)
            .field("target_branch", &self.target_branch)
            .field("skip_tag", &self.skip_tag)
            .field("git_user", &self.git_user)
            .field("git_email", &self.git_email)
            .field("remote_host", &self.remote_host)
            .field("actor", &self.actor)
            .field("token", &"***")
            .field("repository", &self.repository)
            .field("git_ref", &self.git_ref)
            .field("head_ref", &self.head_ref)
            .finish()
    }
}

impl Config {
    /// Resolve settings from the process environment and `file`
    pub fn from_env(file: &FileConfig) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(|name| std::env::var(name).ok(), file, &cwd)
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. `INPUT_SKIP-TAG` enables skipping only
    /// when it is exactly `"true"`.
    pub fn resolve<F>(lookup: F, file: &FileConfig, cwd: &Path) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let require = |name: &str| {
            get(name).ok_or_else(|| {
                BumpError::config(format!("Environment variable {} is required", name))
            })
        };

        let base = get(env::WORKSPACE)
            .map(PathBuf::from)
            .unwrap_or_else(|| cwd.to_path_buf());
        // the package dir is always relative to the workspace, even with a leading `/`
        let working_dir = match get(env::PACKAGE_DIR).or_else(|| file.package_dir.clone()) {
            Some(dir) => base.join(dir.trim_start_matches('/')),
            None => base,
        };

        let skip_tag = match lookup(env::SKIP_TAG) {
            Some(value) if !value.is_empty() => value == "true",
            _ => file.skip_tag.unwrap_or(false),
        };

        let remote_host = get(env::SERVER_URL)
            .map(|url| host_from_server_url(&url))
            .or_else(|| file.remote_host.clone())
            .unwrap_or_else(|| DEFAULT_REMOTE_HOST.to_string());

        Ok(Config {
            working_dir,
            tag_prefix: get(env::TAG_PREFIX)
                .or_else(|| file.tag_prefix.clone())
                .unwrap_or_default(),
            commit_message: CommitTemplate::new(
                get(env::COMMIT_MESSAGE)
                    .or_else(|| file.commit_message.clone())
                    .unwrap_or_else(|| DEFAULT_COMMIT_MESSAGE.to_string()),
            ),
            target_branch: get(env::TARGET_BRANCH).or_else(|| file.target_branch.clone()),
            skip_tag,
            git_user: get(env::GIT_USER)
                .or_else(|| file.git_user.clone())
                .unwrap_or_else(|| DEFAULT_GIT_USER.to_string()),
            git_email: get(env::GIT_EMAIL)
                .or_else(|| file.git_email.clone())
                .unwrap_or_else(|| DEFAULT_GIT_EMAIL.to_string()),
            remote_host,
            actor: require(env::ACTOR)?,
            token: require(env::TOKEN)?,
            repository: require(env::REPOSITORY)?,
            git_ref: get(env::REF),
            head_ref: get(env::HEAD_REF),
        })
    }
}

/// `https://github.example.com/` -> `github.example.com`
fn host_from_server_url(url: &str) -> String {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    without_scheme.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (env::ACTOR, "octocat"),
            (env::TOKEN, "secret"),
            (env::REPOSITORY, "octo/app"),
            (env::REF, "refs/heads/main"),
        ])
    }

    fn resolve(vars: &HashMap<&'static str, &'static str>, file: &FileConfig) -> Result<Config> {
        Config::resolve(
            |name| vars.get(name).map(|v| v.to_string()),
            file,
            Path::new("/work"),
        )
    }

    #[test]
    fn test_defaults() {
        let config = resolve(&required(), &FileConfig::default()).unwrap();
        assert_eq!(config.working_dir, PathBuf::from("/work"));
        assert_eq!(config.tag_prefix, "");
        assert_eq!(config.commit_message.template, DEFAULT_COMMIT_MESSAGE);
        assert_eq!(config.target_branch, None);
        assert!(!config.skip_tag);
        assert_eq!(config.git_user, DEFAULT_GIT_USER);
        assert_eq!(config.git_email, DEFAULT_GIT_EMAIL);
        assert_eq!(config.remote_host, "github.com");
        assert_eq!(config.git_ref.as_deref(), Some("refs/heads/main"));
        assert_eq!(config.head_ref, None);
    }

    #[test]
    fn test_skip_tag_is_literal_true_only() {
        for (value, expected) in [("true", true), ("TRUE", false), ("1", false), ("yes", false)] {
            let mut vars = required();
            vars.insert(env::SKIP_TAG, value);
            let config = resolve(&vars, &FileConfig::default()).unwrap();
            assert_eq!(config.skip_tag, expected, "value {:?}", value);
        }
    }

    #[test]
    fn test_env_skip_tag_overrides_file() {
        let mut vars = required();
        vars.insert(env::SKIP_TAG, "false");
        let file = FileConfig {
            skip_tag: Some(true),
            ..FileConfig::default()
        };
        assert!(!resolve(&vars, &file).unwrap().skip_tag);
        assert!(resolve(&required(), &file).unwrap().skip_tag);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let mut vars = required();
        vars.insert(env::HEAD_REF, "");
        vars.insert(env::TAG_PREFIX, "");
        let file = FileConfig {
            tag_prefix: Some("v".to_string()),
            ..FileConfig::default()
        };
        let config = resolve(&vars, &file).unwrap();
        assert_eq!(config.head_ref, None);
        assert_eq!(config.tag_prefix, "v");
    }

    #[test]
    fn test_package_dir_joins_workspace() {
        let mut vars = required();
        vars.insert(env::WORKSPACE, "/home/runner/work/app");
        vars.insert(env::PACKAGE_DIR, "packages/web");
        let config = resolve(&vars, &FileConfig::default()).unwrap();
        assert_eq!(
            config.working_dir,
            PathBuf::from("/home/runner/work/app/packages/web")
        );
    }

    #[test]
    fn test_absolute_package_dir_stays_inside_workspace() {
        let mut vars = required();
        vars.insert(env::WORKSPACE, "/home/runner/work/app");
        vars.insert(env::PACKAGE_DIR, "/packages/web");
        let config = resolve(&vars, &FileConfig::default()).unwrap();
        assert_eq!(
            config.working_dir,
            PathBuf::from("/home/runner/work/app/packages/web")
        );
    }

    #[test]
    fn test_server_url_host() {
        let mut vars = required();
        vars.insert(env::SERVER_URL, "https://git.example.com/");
        let config = resolve(&vars, &FileConfig::default()).unwrap();
        assert_eq!(config.remote_host, "git.example.com");
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let mut vars = required();
        vars.remove(env::TOKEN);
        let err = resolve(&vars, &FileConfig::default()).unwrap_err();
        assert!(matches!(err, BumpError::Config(_)));
        assert!(err.to_string().contains("GITHUB_TOKEN"));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = resolve(&required(), &FileConfig::default()).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_unknown_file_key_rejected() {
        let result: std::result::Result<FileConfig, _> = toml::from_str("tag_prefx = \"v\"");
        assert!(result.is_err());
    }
}
