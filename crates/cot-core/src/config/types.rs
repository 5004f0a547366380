//! Configuration type definitions for the `cot` CLI.
//!
//! These types are deserialized from `~/.cot/config.toml`.

use serde::{Deserialize, Serialize};

/// Main configuration loaded from the user config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CotConfig {
    /// Which editor to drive
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Script interpreter settings
    #[serde(default)]
    pub script: ScriptConfig,

    /// `--wait` polling settings
    #[serde(default)]
    pub wait: WaitConfig,
}

/// Target application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ApplicationConfig {
    /// Application name or path to its `.app` bundle.
    ///
    /// When unset, the bundle enclosing the `cot` executable is used, falling
    /// back to the default editor name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScriptConfig {
    /// Interpreter executable. It is invoked as `<interpreter> -` with the
    /// script on stdin.
    #[serde(default = "super::defaults::default_interpreter")]
    pub interpreter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitConfig {
    /// Interval between window existence checks.
    /// Default: 500ms.
    #[serde(default = "super::defaults::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl WaitConfig {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }
}
