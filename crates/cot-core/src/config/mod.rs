//! # Configuration System
//!
//! TOML configuration for the `cot` CLI.
//!
//! ## Configuration Sources
//!
//! Later sources override earlier ones:
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.cot/config.toml`
//! 3. **Environment** - `COT_APPLICATION`, `COT_INTERPRETER`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.cot/config.toml
//! [application]
//! name = "/Applications/CotEditor.app"
//!
//! [script]
//! interpreter = "osascript"
//!
//! [wait]
//! poll_interval_ms = 500
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use cot_core::config::CotConfig;
//!
//! fn example() -> Result<(), cot_core::errors::ConfigError> {
//!     let config = CotConfig::load()?;
//!     println!("{}", config.script.interpreter);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{ApplicationConfig, CotConfig, ScriptConfig, WaitConfig};

use crate::errors::ConfigError;

impl CotConfig {
    /// Load defaults, the user config file and environment overrides, then validate.
    pub fn load() -> Result<Self, ConfigError> {
        loading::load()
    }
}
