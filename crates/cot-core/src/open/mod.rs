//! Sequencing an invocation against the editor.

pub mod handler;
pub mod types;

pub use handler::open_in_editor;
pub use types::{OpenOutcome, OpenRequest, OpenTarget};
