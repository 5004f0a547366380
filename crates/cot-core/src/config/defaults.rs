//! Default implementations for configuration types.

use crate::config::types::{ScriptConfig, WaitConfig};
use crate::script::OsaScriptRunner;

/// Editor addressed when nothing else names one.
pub const DEFAULT_APPLICATION: &str = "CotEditor";

/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_interpreter() -> String {
    OsaScriptRunner::DEFAULT_INTERPRETER.to_string()
}

/// Returns the default poll interval (500ms).
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_poll_interval_ms() -> u64 {
    500
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
        }
    }
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}
