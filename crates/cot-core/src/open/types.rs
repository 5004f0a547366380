use crate::files::FileRequest;
use crate::location::LocationRequest;
use crate::remote::LaunchMode;
use crate::wait::WaitOutcome;

/// What the invocation puts in front of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenTarget {
    /// Open these files, in order.
    Files(Vec<FileRequest>),
    /// Create a document holding piped-in text.
    Pipe(String),
    /// Create an empty document.
    NewDocument,
    /// Only launch or activate the application.
    Nothing,
}

/// A fully validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenRequest {
    pub target: OpenTarget,
    pub location: LocationRequest,
    pub wait: bool,
    pub launch_mode: LaunchMode,
}

/// What happened while handling an [`OpenRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpenOutcome {
    /// Caret offset set in the front document, if a location was requested.
    pub caret_offset: Option<usize>,
    /// How waiting ended, if the invocation waited.
    pub wait: Option<WaitOutcome>,
}
