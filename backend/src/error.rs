//! Error types for the logdrop server.
//!
//! - [`ConfigError`] - missing or invalid server configuration
//! - [`JobError`] - job storage errors (input/output directories)
//! - [`ServerError`] - HTTP-facing errors, converted into JSON responses
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use crate::api::types::error_response;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while building the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing {0} environment variable")]
    MissingVar(&'static str),

    /// An environment variable has an unusable value.
    #[error("Invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

// =============================================================================
// Job Errors
// =============================================================================

/// Errors from the job store.
#[derive(Debug, Error)]
pub enum JobError {
    /// Reading or writing a job file failed.
    #[error("Job IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The job id is not a UUID.
    #[error("Invalid job id: {0}")]
    InvalidId(String),

    /// No output exists for this job yet.
    #[error("Job not found: {0}")]
    NotFound(String),
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Job store error.
    #[error("Job error: {0}")]
    Job(#[from] JobError),

    /// Invalid request.
    #[error("{0}")]
    BadRequest(String),

    /// Server internal error.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// HTTP status matching this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Job(JobError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ServerError::Job(JobError::NotFound(_)) => StatusCode::NOT_FOUND,
            ServerError::Job(JobError::Io(_)) | ServerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Status code plus JSON error body, the shape every handler returns on failure.
    pub fn into_http(self) -> (StatusCode, Json<Value>) {
        (self.status_code(), Json(error_response(&self.to_string())))
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for job store operations.
pub type JobResult<T> = Result<T, JobError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
