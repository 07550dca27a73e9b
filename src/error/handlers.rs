//! Error handlers
//!
//! Logs internal failures and maps them onto the messages the form shows.

use crate::error::types::{ApiError, AppError, FormError};
use log::{error, warn};

/// Log an API failure and collapse it into the generic user-facing error.
///
/// The underlying cause is never surfaced to the user.
pub fn handle_api_error(err: &ApiError) -> FormError {
    match err {
        ApiError::Status(status) => warn!("Submission rejected by server: {}", status),
        ApiError::Http(e) if e.is_timeout() => warn!("Submission timed out: {}", e),
        _ => error!("Submission failed: {}", err),
    }
    FormError::TransportFailure
}

/// Handle a fatal application error
pub fn handle_error(err: &AppError) {
    error!("api-form error: {}", err);
}

/// Convert an application error to a process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Api(_) => 69,
        AppError::IoError(_) => 74,
    }
}
