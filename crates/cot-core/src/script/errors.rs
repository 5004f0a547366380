use crate::errors::CotError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to run script interpreter '{interpreter}': {source}")]
    SpawnFailed {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Script exited with {}: {stderr}\nscript: {script}", describe_code(.code))]
    ExecutionFailed {
        code: Option<i32>,
        script: String,
        stderr: String,
    },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl CotError for ScriptError {
    fn error_code(&self) -> &'static str {
        match self {
            ScriptError::SpawnFailed { .. } => "SCRIPT_SPAWN_FAILED",
            ScriptError::ExecutionFailed { .. } => "SCRIPT_EXECUTION_FAILED",
        }
    }
}
