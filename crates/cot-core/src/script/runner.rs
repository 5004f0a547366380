//! Script execution through an external interpreter process.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::script::errors::ScriptError;

/// Whether the caller waits for the remote application's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Block until the application answers and return its result.
    Sync,
    /// Fire-and-forget: the interpreter does not wait for the application.
    ///
    /// Re-opening a document that is already open can stall the reply for a
    /// very long time, so open commands are sent this way.
    Async,
}

/// Something that can run a script body and return its trimmed output.
pub trait ScriptExecutor {
    fn execute(&self, script: &str, mode: ExecutionMode) -> Result<String, ScriptError>;
}

/// Runs scripts through `osascript` (or another interpreter reading `-` from stdin).
///
/// One subprocess is spawned per call; nothing is reused between calls.
#[derive(Debug, Clone)]
pub struct OsaScriptRunner {
    interpreter: String,
}

impl OsaScriptRunner {
    pub const DEFAULT_INTERPRETER: &'static str = "osascript";

    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }
}

impl Default for OsaScriptRunner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERPRETER)
    }
}

/// Wrap a script body so the interpreter ignores the application's reply.
pub fn wrap_async(script: &str) -> String {
    format!("ignoring application responses\n{}\nend ignoring", script)
}

/// Remove at most one trailing line terminator (`\n`, `\r\n` or `\r`).
pub fn strip_one_line_terminator(mut output: String) -> String {
    if output.ends_with("\r\n") {
        output.truncate(output.len() - 2);
    } else if output.ends_with('\n') || output.ends_with('\r') {
        output.pop();
    }
    output
}

impl ScriptExecutor for OsaScriptRunner {
    fn execute(&self, script: &str, mode: ExecutionMode) -> Result<String, ScriptError> {
        let body = match mode {
            ExecutionMode::Sync => script.to_string(),
            ExecutionMode::Async => wrap_async(script),
        };

        debug!(
            event = "core.script.execute_started",
            interpreter = %self.interpreter,
            mode = ?mode,
            script = %body
        );

        let spawn_failed = |source| ScriptError::SpawnFailed {
            interpreter: self.interpreter.clone(),
            source,
        };

        let mut child = Command::new(&self.interpreter)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_failed)?;

        // Feed stdin from a separate thread so a large result can't fill the
        // stdout pipe while we are still writing.
        let writer = child.stdin.take().map(|mut stdin| {
            let bytes = body.clone().into_bytes();
            std::thread::spawn(move || stdin.write_all(&bytes))
        });

        let output = child.wait_with_output().map_err(spawn_failed)?;

        if let Some(handle) = writer {
            match handle.join() {
                Ok(Err(e)) => warn!(
                    event = "core.script.stdin_write_failed",
                    interpreter = %self.interpreter,
                    error = %e
                ),
                Err(_) => warn!(
                    event = "core.script.stdin_write_failed",
                    interpreter = %self.interpreter,
                    error = "writer thread panicked"
                ),
                Ok(Ok(())) => {}
            }
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            debug!(
                event = "core.script.execute_failed",
                interpreter = %self.interpreter,
                code = ?output.status.code(),
                stderr = %stderr
            );
            return Err(ScriptError::ExecutionFailed {
                code: output.status.code(),
                script: body,
                stderr,
            });
        }

        let result =
            strip_one_line_terminator(String::from_utf8_lossy(&output.stdout).into_owned());

        debug!(
            event = "core.script.execute_completed",
            interpreter = %self.interpreter,
            result_len = result.len()
        );

        Ok(result)
    }
}
