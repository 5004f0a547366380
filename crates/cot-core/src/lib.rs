//! cot-core: drive a scriptable text editor from the command line.
//!
//! The editor is controlled through the OS scripting bridge (`osascript`).
//! Each command is a one-shot script run in its own interpreter process.
//!
//! # Main Entry Points
//!
//! - [`remote`] - The editor as a remote object (launch, open, tell)
//! - [`open`] - Sequence one CLI invocation against the editor
//! - [`location`] - Line/column to character offset translation
//! - [`wait`] - Block until an editor window closes
//! - [`files`] - Validate and create file arguments
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod files;
pub mod location;
pub mod logging;
pub mod open;
pub mod remote;
pub mod script;
pub mod wait;

// Re-export commonly used types at crate root for convenience
pub use config::CotConfig;
pub use files::{FileError, FileRequest};
pub use location::LocationRequest;
pub use open::{OpenOutcome, OpenRequest, OpenTarget};
pub use remote::{LaunchMode, RemoteApplication, RemoteError, WindowHandle, WindowState};
pub use script::{ExecutionMode, OsaScriptRunner, ScriptError, ScriptExecutor};
pub use wait::{CloseMonitor, PollingMonitor, WaitOutcome};

// Re-export handler modules as the primary API
pub use open::handler as open_ops;

// Re-export logging initialization
pub use logging::init_logging;
