//! Remote scripting bridge.
//!
//! Every command sent to the editor goes through a [`ScriptExecutor`]. The
//! production executor is [`OsaScriptRunner`], which spawns one interpreter
//! process per script.

pub mod errors;
pub mod escape;
pub mod runner;

pub use errors::ScriptError;
pub use escape::escape_quotes;
pub use runner::{ExecutionMode, OsaScriptRunner, ScriptExecutor, strip_one_line_terminator};
