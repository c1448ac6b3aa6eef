//! Configuration loading and discovery for `png2src.toml`

use super::schema::{CliOverrides, PngConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "png2src.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse png2src.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find png2src.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    env::current_dir().ok().and_then(find_config_from)
}

/// Find png2src.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration and apply command-line overrides.
///
/// If a path is provided, loads from that file. Otherwise uses `find_config()`
/// and falls back to defaults when nothing is found. Validation runs after the
/// overrides are merged, so a command-line value replaces a bad file value
/// instead of being rejected with it.
pub fn load_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<PngConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    let mut config = match config_path {
        Some(p) => {
            log::debug!("Using config {}", p.display());
            read_config_file(&p)?
        }
        None => PngConfig::default(),
    };
    config.merge_cli(overrides);

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Parse a configuration file without validating it.
pub fn read_config_file(path: &Path) -> Result<PngConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
