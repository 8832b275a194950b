//! Application configuration.
//!
//! [`UploadConfig`] is handed to the upload widget when it is created;
//! the constants below are shared defaults.

/// Upload endpoint, relative to the page origin.
pub const DEFAULT_ENDPOINT: &str = "/upload";

/// Multipart field the file is sent under.
pub const FILE_FIELD: &str = "file";

/// Instruction shown under the drop zone.
pub const UPLOAD_TEXT: &str =
    "Click here to upload a log file or drag it to this area to upload";

/// Expected source and format of the uploaded file. Advisory only.
pub const DEFAULT_ACCEPT_HINT: &str =
    "The log file must be collected from Google Analytics and must be in CSV format.";

/// How long a notification stays on screen (ms).
pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

/// Maximum notifications on screen at once.
pub const MAX_NOTIFICATIONS: usize = 5;

/// Upload widget options.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadConfig {
    /// Where files are posted
    pub endpoint: String,
    /// Accept several files per selection or drop
    pub multiple: bool,
    /// Text telling the user what file to upload
    pub accept_hint: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            multiple: true,
            accept_hint: DEFAULT_ACCEPT_HINT.to_string(),
        }
    }
}

impl UploadConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_accept_hint(mut self, hint: impl Into<String>) -> Self {
        self.accept_hint = hint.into();
        self
    }
}
