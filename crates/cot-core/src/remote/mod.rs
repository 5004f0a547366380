//! The target editor modeled as a remote object driven by scripts.

pub mod application;
pub mod errors;
pub mod locate;
pub mod types;

pub use application::{RemoteApplication, application_version};
pub use errors::RemoteError;
pub use locate::{application_display_name, locate_application};
pub use types::{LaunchMode, WindowHandle, WindowState};
