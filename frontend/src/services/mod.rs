//! Upload and notification services.
//!
//! # Services
//!
//! - [`transfer`] - transfer mechanism abstraction
//! - [`upload`] - HTTP multipart transfer via `gloo-net`
//! - [`notify`] - notifier abstraction and browser toasts

pub mod transfer;
pub mod upload;
pub mod notify;

pub use transfer::*;
pub use upload::*;
pub use notify::*;
