//! Error types
//!
//! Defines the user-facing form errors and the internal errors of the API
//! client and the application shell.

use std::fmt;
use std::io;

use reqwest::StatusCode;

/// Errors shown to the user after a submission attempt.
///
/// None of them is fatal; every variant is cleared by the next submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    EmptyInput,
    InvalidFormat,
    NoSelection,
    TransportFailure,
}

impl FormError {
    /// The exact message displayed next to the form.
    pub fn message(&self) -> &'static str {
        match self {
            FormError::EmptyInput => "Input is needed.",
            FormError::InvalidFormat => "Data must be valid: single alphabets or numbers.",
            FormError::NoSelection => "Select at least one option.",
            FormError::TransportFailure => "Failed to fetch response from the server.",
        }
    }
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FormError {}

/// Remote API errors
#[derive(Debug)]
pub enum ApiError {
    InvalidEndpoint(String),
    Http(reqwest::Error),
    Status(StatusCode),
    Decode(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidEndpoint(url) => write!(f, "Invalid endpoint: {}", url),
            ApiError::Http(e) if e.is_timeout() => write!(f, "Request timed out: {}", e),
            ApiError::Http(e) => write!(f, "HTTP request failed: {}", e),
            ApiError::Status(status) => write!(f, "Server returned status {}", status),
            ApiError::Decode(e) => write!(f, "Failed to decode response body: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Http(e) | ApiError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

/// Application-level error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Api(ApiError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Api(e) => write!(f, "API error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        AppError::Api(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
