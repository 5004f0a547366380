use std::path::PathBuf;

use crate::errors::CotError;
use crate::script::ScriptError;

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Could not resolve application '{name}': {source}")]
    Resolution {
        name: String,
        #[source]
        source: ScriptError,
    },

    #[error("Application '{name}' returned an empty bundle identifier")]
    EmptyIdentifier { name: String },

    #[error("Path '{path}' is not valid UTF-8 and can't be sent to the application")]
    NonUtf8Path { path: PathBuf },

    #[error("Script command failed: {source}")]
    Script {
        #[from]
        source: ScriptError,
    },
}

impl CotError for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            RemoteError::Resolution { .. } => "APPLICATION_RESOLUTION_FAILED",
            RemoteError::EmptyIdentifier { .. } => "APPLICATION_EMPTY_IDENTIFIER",
            RemoteError::NonUtf8Path { .. } => "PATH_NOT_UTF8",
            RemoteError::Script { .. } => "REMOTE_SCRIPT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            RemoteError::Resolution { .. }
                | RemoteError::EmptyIdentifier { .. }
                | RemoteError::NonUtf8Path { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_display() {
        let error = RemoteError::Resolution {
            name: "CotEditor".to_string(),
            source: ScriptError::ExecutionFailed {
                code: Some(1),
                script: "id of application \"CotEditor\"".to_string(),
                stderr: "Can't get application \"CotEditor\".".to_string(),
            },
        };
        assert!(
            error
                .to_string()
                .starts_with("Could not resolve application 'CotEditor':")
        );
        assert_eq!(error.error_code(), "APPLICATION_RESOLUTION_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_script_error_converts() {
        let error: RemoteError = ScriptError::ExecutionFailed {
            code: Some(1),
            script: "contents".to_string(),
            stderr: String::new(),
        }
        .into();
        assert_eq!(error.error_code(), "REMOTE_SCRIPT_FAILED");
        assert!(!error.is_user_error());
    }
}
