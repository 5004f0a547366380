//! Line/column to character offset translation.

pub mod resolver;
pub mod types;

pub use resolver::{resolve_offset, split_lines_inclusive};
pub use types::LocationRequest;
