//! Transfer mechanism abstraction.
//!
//! A transfer mechanism accepts a file and reports its progress as
//! [`StatusUpdate`] events. The widget only reacts to those events, so any
//! implementation (HTTP, scripted fake) can drive it.

use std::rc::Rc;

use crate::types::{StatusUpdate, TaskId};

/// Receives the status events of submitted transfers.
pub type StatusCallback = Rc<dyn Fn(StatusUpdate)>;

/// A file picked by the user.
pub trait FileHandle {
    /// Display name.
    fn file_name(&self) -> String;
    /// Size in bytes.
    fn byte_len(&self) -> u64;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        web_sys::File::name(self)
    }

    fn byte_len(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Everything a mechanism needs to upload one file.
#[derive(Clone, Debug)]
pub struct TransferRequest<F> {
    pub id: TaskId,
    /// Destination URL
    pub url: String,
    /// Multipart field carrying the file
    pub field_name: String,
    pub file: F,
}

pub trait TransferMechanism {
    type File: FileHandle;

    /// Start uploading `request.file`.
    ///
    /// Implementations report every status change for `request.id`
    /// through `events`, possibly before this call returns. Completion
    /// order across requests is not specified.
    fn submit(&self, request: TransferRequest<Self::File>, events: StatusCallback);
}
