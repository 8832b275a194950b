//! UI Components.
//!
//! - [`UploadWidget`] - drag & drop zone posting files to the upload endpoint
//! - [`FileList`] - tracked uploads and their status
//! - [`NotificationStack`] - transient success/failure messages

mod upload;
mod file_list;
mod notifications;

pub use upload::*;
pub use file_list::*;
pub use notifications::*;
