pub mod errors;
pub mod operations;
pub mod types;

pub use errors::FileError;
pub use operations::resolve_file_requests;
pub use types::FileRequest;
