use tracing::{error, info, warn};

use crate::errors::CotError;

pub fn log_app_startup() {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION")
    );
}

pub fn log_app_error(error: &dyn std::error::Error) {
    error!(
        event = "core.app.error_occurred",
        error = %error,
        error_type = std::any::type_name_of_val(error)
    );
}

/// Log a domain error with its code; user errors are logged as warnings.
pub fn log_core_error(operation: &str, error: &dyn CotError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.operation_failed",
            operation = operation,
            error_code = error.error_code(),
            error = %error
        );
    } else {
        error!(
            event = "core.app.operation_failed",
            operation = operation,
            error_code = error.error_code(),
            error = %error
        );
    }
}
