//! HTTP multipart transfer to the upload endpoint.

use gloo_net::http::Request;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;
use web_sys::{File, FormData};

use super::transfer::{StatusCallback, TransferMechanism, TransferRequest};
use crate::types::{AppError, AppResult, StatusUpdate, TaskId, UploadStatus};

/// Uploads each file in its own `multipart/form-data` POST.
///
/// Redirects are followed by the browser, so any final 2xx response
/// counts as `Done`; everything else ends in `Error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransfer;

impl TransferMechanism for HttpTransfer {
    type File = File;

    fn submit(&self, request: TransferRequest<File>, events: StatusCallback) {
        let id = request.id;
        events(StatusUpdate::new(id, UploadStatus::Uploading));

        spawn_local(async move {
            let result = upload_file(&request.url, &request.field_name, &request.file).await;
            if let Err(e) = &result {
                log::warn!("Upload {} of {} failed: {}", id, request.file.name(), e);
            }
            events(finished(id, result));
        });
    }
}

/// Final status of a transfer.
fn finished(id: TaskId, result: AppResult<()>) -> StatusUpdate {
    match result {
        Ok(()) => StatusUpdate::new(id, UploadStatus::Done),
        Err(e) => StatusUpdate::failed(id, e.to_string()),
    }
}

/// Upload one file under `field_name`.
pub async fn upload_file(url: &str, field_name: &str, file: &File) -> AppResult<()> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(field_name, file, &file.name())
        .map_err(|e| AppError::Request(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| AppError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message: server_message(&body),
        });
    }

    Ok(())
}

/// Extract the message of a server error body.
///
/// The server answers `{"status": "error", "error": "..."}`; anything
/// else is returned as-is.
pub fn server_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("error")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
