use thiserror::Error;

/// Unified error type for calver-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Ref parse error: {0}")]
    RefParse(String),

    #[error("Command `{command}` failed with exit code {code}\nStdout: {stdout}\nStderr: {stderr}")]
    Command {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in calver-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a ref parse error with context
    pub fn ref_parse(msg: impl Into<String>) -> Self {
        BumpError::RefParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a command error. The command line is expected to be redacted already.
    pub fn command(
        command: impl Into<String>,
        code: i32,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        BumpError::Command {
            command: command.into(),
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// True for failures reported by an external executable
    pub fn is_command_failure(&self) -> bool {
        matches!(self, BumpError::Command { .. })
    }
}
