use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{BumpError, Result};

/// Default manifest file name inside the working directory
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Package manifest with a string `version` field
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub path: PathBuf,
    pub version: String,
}

impl Manifest {
    /// Read and parse the manifest at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            BumpError::manifest(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let version = Self::version_from_str(&contents)
            .map_err(|e| BumpError::manifest(format!("{}: {}", path.display(), e)))?;

        Ok(Manifest {
            path: path.to_path_buf(),
            version,
        })
    }

    /// Extract the `version` field from manifest JSON.
    ///
    /// Numbers and booleans are stringified (`2024` -> `"2024"`); null,
    /// arrays and objects are rejected.
    pub fn version_from_str(contents: &str) -> Result<String> {
        let value: Value = serde_json::from_str(contents)
            .map_err(|e| BumpError::manifest(format!("Invalid JSON: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| BumpError::manifest("Manifest is not a JSON object"))?;

        match object.get("version") {
            Some(Value::String(version)) => Ok(version.clone()),
            Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
            Some(other) => Err(BumpError::manifest(format!(
                "Field 'version' must be a string or number, found {}",
                other
            ))),
            None => Err(BumpError::manifest("Missing field 'version'")),
        }
    }
}
