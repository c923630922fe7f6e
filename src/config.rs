// Configuration loading and parsing (config/countback.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Leaderboard CSV path, relative to the working directory.
    pub path: String,
    /// Banner rows before the header row. Sheets usually carry one title
    /// line.
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,
}

fn default_skip_rows() -> usize {
    1
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate configuration from `config/countback.toml` relative to
/// the given `base_dir`.
///
/// This is the lower-level loading primitive that does not auto-copy
/// defaults. Prefer `load_config()` which handles default initialization.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = base_dir.join("config").join("countback.toml");
    let text =
        std::fs::read_to_string(&config_path).map_err(|_| ConfigError::FileNotFound {
            path: config_path.clone(),
        })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: config_path,
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Ensure the config file exists by copying it from `defaults/` when
/// missing. Returns the list of files that were copied.
pub fn ensure_config_files(base_dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let defaults_path = base_dir.join("defaults").join("countback.toml");
    let config_dir = base_dir.join("config");
    let target = config_dir.join("countback.toml");

    if target.exists() {
        return Ok(vec![]);
    }
    if !defaults_path.exists() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "neither {} nor defaults/countback.toml found in {}; \
                 run from the project root or ensure defaults/ is present",
                target.display(),
                base_dir.display()
            ),
        });
    }

    std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to create config directory: {e}"),
    })?;
    std::fs::copy(&defaults_path, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {}: {e}", defaults_path.display()),
    })?;

    Ok(vec![target])
}

/// Convenience wrapper: loads config relative to the current working
/// directory, copying the default config file first if needed.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_files(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.input.path.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "input.path".into(),
            message: "must not be empty".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
