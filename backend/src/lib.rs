//! # Logdrop - receiving server for analytics log uploads
//!
//! Stores each uploaded Google Analytics CSV export as a job for an external
//! worker and serves the job's status and result.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  POST   ┌─────────────┐  write  ┌───────────────────┐
//! │  Frontend   │────────▶│  /upload    │────────▶│ JOB_INPUT_DIR/id  │
//! │  (widget)   │         └─────────────┘         └─────────┬─────────┘
//! └─────────────┘                                           │ worker
//!        ▲        GET     ┌─────────────┐  read   ┌─────────▼─────────┐
//!        └────────────────│ /check /done│◀────────│ JOB_OUTPUT_DIR/id │
//!                         └─────────────┘         └───────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Server configuration
//! - [`jobs`] - File-backed job store
//! - [`api`] - HTTP API server

pub mod error;
pub mod config;
pub mod jobs;
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, JobError, ServerError, ConfigResult, JobResult, ServerResult};

pub use config::ServerConfig;

pub use jobs::{secure_filename, JobOutcome, JobStatus, JobStore};

pub use api::types::{error_response, HealthResponse};

// Server
pub mod server {
    pub use crate::api::server::{router, start_server};
}
