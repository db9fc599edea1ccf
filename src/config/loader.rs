//! Configuration file discovery and loading.

use crate::config::schema::EnvcheckConfig;
use crate::error::{EnvcheckError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".envcheck.yml";

/// Find `.envcheck.yml` in `project_root`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<EnvcheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvcheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvcheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into `EnvcheckConfig`.
///
/// A file holding only whitespace or comments is the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<EnvcheckConfig> {
    let has_content = content
        .lines()
        .any(|l| !l.trim().is_empty() && !l.trim_start().starts_with('#'));
    if !has_content {
        return Ok(EnvcheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| EnvcheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `.envcheck.yml` in
/// `project_root` is used when present and the default config otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<EnvcheckConfig> {
    if let Some(path) = config_override {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(EnvcheckConfig::default()),
    }
}
