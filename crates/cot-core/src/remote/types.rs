use std::fmt;

/// How the application is brought up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    /// Start (if needed) and bring to the front.
    #[default]
    Foreground,
    /// Start (if needed) without stealing focus.
    Background,
}

impl LaunchMode {
    /// The application-level command issued for this mode.
    pub fn command(self) -> &'static str {
        match self {
            LaunchMode::Foreground => "activate",
            LaunchMode::Background => "run",
        }
    }
}

/// Identifier of an editor window, used to detect when it closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowHandle {
    id: String,
}

impl WindowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Result of asking whether a window is still open.
///
/// Closing a window invalidates its reference, so the existence query usually
/// fails with a script error once the user closes it. `Error` keeps that case
/// distinct from a clean "no such window" answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowState {
    Exists,
    NotFound,
    Error(String),
}

impl WindowState {
    pub fn exists(&self) -> bool {
        matches!(self, WindowState::Exists)
    }
}
