//! Configuration loading logic.
//!
//! Reads `~/.cot/config.toml` on top of the built-in defaults and then applies
//! environment overrides. A missing config file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::CotConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

pub const APPLICATION_ENV: &str = "COT_APPLICATION";
pub const INTERPRETER_ENV: &str = "COT_INTERPRETER";

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cot").join("config.toml"))
}

/// Load configuration from the user config file and the process environment.
pub fn load() -> Result<CotConfig, ConfigError> {
    load_from(user_config_path().as_deref(), |key| std::env::var(key).ok())
}

/// Load configuration from an explicit file and environment lookup.
pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<CotConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => load_config_file(path)?.unwrap_or_default(),
        None => CotConfig::default(),
    };

    apply_env_overrides(&mut config, env);
    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<CotConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_missing", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());
    Ok(Some(config))
}

fn apply_env_overrides<F>(config: &mut CotConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(name) = env(APPLICATION_ENV) {
        config.application.name = Some(name);
    }
    if let Some(interpreter) = env(INTERPRETER_ENV) {
        config.script.interpreter = interpreter;
    }
}
