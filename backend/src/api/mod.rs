//! HTTP API module.
//!
//! Upload endpoint, job pages, and the SSE log stream.

pub mod logs;
pub mod pages;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::{router, start_server, AppState, SharedState, FILE_FIELD};
pub use types::*;
