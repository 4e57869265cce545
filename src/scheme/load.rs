//! Loading color schemes from files and the built-in set.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::ColorScheme;

/// Names of the schemes compiled into the crate.
pub const BUILTIN_SCHEMES: &[&str] = &["one-dark", "one-light"];

const ONE_DARK: &str = include_str!("../../themes/one-dark.yaml");
const ONE_LIGHT: &str = include_str!("../../themes/one-light.yaml");

/// Error type for scheme loading.
#[derive(Debug, thiserror::Error)]
pub enum SchemeError {
    /// Failed to read a scheme file from disk.
    #[error("failed to read scheme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML scheme: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON scheme: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension is not one of `yaml`, `yml` or `json`.
    #[error("unsupported scheme file format: {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("unknown built-in scheme '{name}' (available: {})", BUILTIN_SCHEMES.join(", "))]
    UnknownBuiltin { name: String },
}

impl ColorScheme {
    /// Parses a scheme from YAML source.
    pub fn from_yaml_str(source: &str) -> Result<Self, SchemeError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a scheme from JSON source.
    pub fn from_json_str(source: &str) -> Result<Self, SchemeError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a scheme file, picking the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`SchemeError::UnsupportedFormat`] before touching the disk if
    /// the extension is not recognized.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemeError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, SchemeError> = match ext.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            Some("json") => Self::from_json_str,
            _ => {
                return Err(SchemeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| SchemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scheme = parse(&source)?;
        debug!(path = %path.display(), name = %scheme.name, "loaded color scheme");
        Ok(scheme)
    }

    /// Returns one of the built-in schemes by name.
    pub fn builtin(name: &str) -> Result<Self, SchemeError> {
        let source = match name {
            "one-dark" => ONE_DARK,
            "one-light" => ONE_LIGHT,
            _ => {
                return Err(SchemeError::UnknownBuiltin {
                    name: name.to_string(),
                })
            }
        };
        debug!(name, "loading built-in color scheme");
        Self::from_yaml_str(source)
    }

    /// Returns the built-in scheme called `name`, or loads `name` as a path.
    pub fn from_name_or_path(name: &str) -> Result<Self, SchemeError> {
        if BUILTIN_SCHEMES.contains(&name) {
            Self::builtin(name)
        } else {
            Self::load(name)
        }
    }
}
