//! Remote application handle.

use std::path::Path;

use tracing::{debug, info};

use crate::remote::errors::RemoteError;
use crate::remote::types::{LaunchMode, WindowHandle, WindowState};
use crate::script::{ExecutionMode, ScriptError, ScriptExecutor, escape_quotes};
use crate::wait::WindowProbe;

/// A running (or launchable) editor instance addressed by name.
///
/// The bundle identifier is resolved once in [`RemoteApplication::connect`] and
/// never changes afterwards. The process id is only known after [`launch`].
///
/// [`launch`]: RemoteApplication::launch
pub struct RemoteApplication<E: ScriptExecutor> {
    name: String,
    bundle_identifier: String,
    process_id: Option<String>,
    executor: E,
}

/// Query an application's version string.
///
/// Runs outside a `tell` block, but the scripting bridge may still start the
/// application to answer.
pub fn application_version<E: ScriptExecutor>(
    executor: &E,
    name: &str,
) -> Result<String, ScriptError> {
    executor.execute(
        &format!("version of application \"{}\"", escape_quotes(name)),
        ExecutionMode::Sync,
    )
}

impl<E: ScriptExecutor> RemoteApplication<E> {
    /// Resolve the application's bundle identifier and build a handle.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Resolution`] if the identifier query fails. The
    /// CLI cannot address anything without it.
    pub fn connect(name: impl Into<String>, executor: E) -> Result<Self, RemoteError> {
        let name = name.into();
        debug!(event = "core.remote.resolve_started", name = %name);

        let bundle_identifier = executor
            .execute(
                &format!("id of application \"{}\"", escape_quotes(&name)),
                ExecutionMode::Sync,
            )
            .map_err(|source| RemoteError::Resolution {
                name: name.clone(),
                source,
            })?;

        if bundle_identifier.trim().is_empty() {
            return Err(RemoteError::EmptyIdentifier { name });
        }

        info!(
            event = "core.remote.resolve_completed",
            name = %name,
            bundle_identifier = %bundle_identifier
        );

        Ok(Self {
            name,
            bundle_identifier,
            process_id: None,
            executor,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bundle_identifier(&self) -> &str {
        &self.bundle_identifier
    }

    pub fn process_id(&self) -> Option<&str> {
        self.process_id.as_deref()
    }

    /// Start the application (in front or in the background) and record its pid.
    ///
    /// The scripting bridge can't report the pid of the app it just started, so
    /// the pid is looked up through System Events by bundle identifier.
    pub fn launch(&mut self, mode: LaunchMode) -> Result<(), RemoteError> {
        info!(event = "core.remote.launch_started", name = %self.name, mode = ?mode);

        self.tell(mode.command(), ExecutionMode::Sync)?;

        let pid = self.executor.execute(
            &format!(
                "tell application \"System Events\" to unix id of (first process whose bundle identifier is \"{}\")",
                escape_quotes(&self.bundle_identifier)
            ),
            ExecutionMode::Sync,
        )?;

        info!(
            event = "core.remote.launch_completed",
            name = %self.name,
            pid = %pid
        );
        self.process_id = Some(pid);
        Ok(())
    }

    /// Ask the application to open a file. Does not wait for a reply.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NonUtf8Path`] for a path that can't be written
    /// into a script unchanged.
    pub fn open(&self, path: &Path) -> Result<(), RemoteError> {
        let path = path.to_str().ok_or_else(|| RemoteError::NonUtf8Path {
            path: path.to_path_buf(),
        })?;
        debug!(event = "core.remote.open_requested", path = %path);
        self.tell(
            &format!("open POSIX file \"{}\"", escape_quotes(path)),
            ExecutionMode::Async,
        )?;
        Ok(())
    }

    /// Send a command scoped to the application.
    pub fn tell(&self, script: &str, mode: ExecutionMode) -> Result<String, RemoteError> {
        let script = format!("tell app \"{}\" to {}", escape_quotes(&self.name), script);
        Ok(self.executor.execute(&script, mode)?)
    }

    /// Send a command scoped to the document at a 1-based index.
    pub fn tell_document(&self, script: &str, index: usize) -> Result<String, RemoteError> {
        self.tell(
            &format!("tell document {} to {}", index, script),
            ExecutionMode::Sync,
        )
    }

    /// Identifier of the window at a 1-based index.
    pub fn window_id(&self, index: usize) -> Result<WindowHandle, RemoteError> {
        let id = self.tell(&format!("id of window {}", index), ExecutionMode::Sync)?;
        Ok(WindowHandle::new(id))
    }

    /// Whether the window is still open, keeping query failures visible.
    pub fn window_state(&self, window: &WindowHandle) -> WindowState {
        match self.tell(
            &format!("exists window id {}", window.id()),
            ExecutionMode::Sync,
        ) {
            Ok(result) if result == "true" => WindowState::Exists,
            Ok(_) => WindowState::NotFound,
            Err(e) => WindowState::Error(e.to_string()),
        }
    }

    /// Whether the window is still open. A failed query counts as closed.
    pub fn window_exists(&self, window: &WindowHandle) -> bool {
        self.window_state(window).exists()
    }

    pub fn make_new_document(&self) -> Result<(), RemoteError> {
        self.tell("make new document", ExecutionMode::Sync)?;
        Ok(())
    }

    /// Replace the contents of the front document. Does not wait for a reply.
    pub fn set_document_contents(&self, text: &str) -> Result<(), RemoteError> {
        self.tell(
            &format!(
                "tell document 1 to set contents to \"{}\"",
                escape_quotes(text)
            ),
            ExecutionMode::Async,
        )?;
        Ok(())
    }

    pub fn document_contents(&self) -> Result<String, RemoteError> {
        self.tell_document("contents", 1)
    }

    /// Put the caret at a character offset in the front document and scroll to it.
    pub fn place_caret(&self, offset: usize) -> Result<(), RemoteError> {
        self.tell_document(&format!("set range of selection to {{{}, 0}}", offset), 1)?;
        self.tell_document("scroll to caret", 1)?;
        Ok(())
    }
}

impl<E: ScriptExecutor> WindowProbe for RemoteApplication<E> {
    fn window_state(&self, window: &WindowHandle) -> WindowState {
        RemoteApplication::window_state(self, window)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::script::{ExecutionMode, ScriptError, ScriptExecutor};

    /// Records every script and answers from a queue of canned replies.
    ///
    /// An empty queue answers with an empty string.
    #[derive(Default)]
    pub struct MockExecutor {
        pub calls: RefCell<Vec<(String, ExecutionMode)>>,
        pub replies: RefCell<VecDeque<Result<String, ScriptError>>>,
    }

    impl MockExecutor {
        pub fn with_replies(replies: Vec<Result<String, ScriptError>>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.into()),
            }
        }

        pub fn scripts(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(s, _)| s.clone()).collect()
        }

        pub fn modes(&self) -> Vec<ExecutionMode> {
            self.calls.borrow().iter().map(|(_, m)| *m).collect()
        }
    }

    pub fn ok(s: &str) -> Result<String, ScriptError> {
        Ok(s.to_string())
    }

    pub fn failed(stderr: &str) -> Result<String, ScriptError> {
        Err(ScriptError::ExecutionFailed {
            code: Some(1),
            script: String::new(),
            stderr: stderr.to_string(),
        })
    }

    impl ScriptExecutor for MockExecutor {
        fn execute(&self, script: &str, mode: ExecutionMode) -> Result<String, ScriptError> {
            self.calls.borrow_mut().push((script.to_string(), mode));
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    impl ScriptExecutor for &MockExecutor {
        fn execute(&self, script: &str, mode: ExecutionMode) -> Result<String, ScriptError> {
            (**self).execute(script, mode)
        }
    }
}
