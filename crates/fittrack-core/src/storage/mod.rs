mod config;

pub use config::{Config, LogConfig, ProgressConfig, TimerConfig};

use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Returns `~/.config/fittrack[-dev]/` based on FITTRACK_ENV.
///
/// Set FITTRACK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory cannot be determined or if
/// creating the config directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .ok_or_else(|| ConfigError::NoDataDir("home directory not found".into()))?
        .join(".config");

    let env = std::env::var("FITTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("fittrack-dev")
    } else {
        base_dir.join("fittrack")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
