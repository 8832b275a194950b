//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Task Types** - tracked uploads and their lifecycle
//! - **Notification Types** - transient user messages
//! - **Error Types** - Frontend error handling

use std::fmt;

// =============================================================================
// Task Types
// =============================================================================

/// Identifier of a tracked upload, unique within one widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle of one upload.
///
/// Progresses `Selected → Uploading → Done | Error` and never goes back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UploadStatus {
    Selected,
    Uploading,
    Done,
    Error,
}

impl UploadStatus {
    /// Position in the lifecycle. Both terminal states share the last rank.
    pub fn rank(self) -> u8 {
        match self {
            UploadStatus::Selected => 0,
            UploadStatus::Uploading => 1,
            UploadStatus::Done | UploadStatus::Error => 2,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, UploadStatus::Done | UploadStatus::Error)
    }

    /// Get CSS class for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            UploadStatus::Selected => "upload-item-selected",
            UploadStatus::Uploading => "upload-item-uploading",
            UploadStatus::Done => "upload-item-done",
            UploadStatus::Error => "upload-item-error",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            UploadStatus::Selected => "selected",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Done => "done",
            UploadStatus::Error => "error",
        };
        f.write_str(label)
    }
}

/// One tracked file transfer attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadTask {
    pub id: TaskId,
    /// Display name of the selected file
    pub name: String,
    /// Size in bytes
    pub size: u64,
    pub status: UploadStatus,
    /// Diagnostic reported with `Error`, never shown to the user
    pub error: Option<String>,
}

impl UploadTask {
    pub fn new(id: TaskId, name: impl Into<String>, size: u64) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            status: UploadStatus::Selected,
            error: None,
        }
    }
}

/// Status event emitted by a transfer mechanism.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusUpdate {
    pub id: TaskId,
    pub status: UploadStatus,
    pub error: Option<String>,
}

impl StatusUpdate {
    pub fn new(id: TaskId, status: UploadStatus) -> Self {
        Self { id, status, error: None }
    }

    pub fn failed(id: TaskId, error: impl Into<String>) -> Self {
        Self {
            id,
            status: UploadStatus::Error,
            error: Some(error.into()),
        }
    }
}

/// Argument of the file state change handler: the updated task plus
/// a snapshot of every tracked task.
#[derive(Clone, Debug, PartialEq)]
pub struct FileStateChange {
    pub task: UploadTask,
    pub file_list: Vec<UploadTask>,
}

// =============================================================================
// Notification Types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

impl NotificationLevel {
    /// Get CSS class for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationLevel::Success => "notification-success",
            NotificationLevel::Error => "notification-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(self) -> &'static str {
        match self {
            NotificationLevel::Success => "✅",
            NotificationLevel::Error => "❌",
        }
    }
}

/// A transient message shown to the user.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn upload_succeeded(file_name: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: format!("{} file uploaded successfully.", file_name),
        }
    }

    pub fn upload_failed(file_name: &str) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: format!("{} file upload failed.", file_name),
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Building the upload request failed.
    Request(String),
    /// Network/HTTP error.
    Network(String),
    /// Server answered with a non-success status.
    Server { status: u16, message: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Request(msg) => write!(f, "Request error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
