//! HTTP server for log uploads and job results.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                               |
//! |--------|-------------------|-------------------------------------------|
//! | GET    | `/form`           | Plain HTML upload form                    |
//! | POST   | `/upload`         | Store a multipart `file` as a new job     |
//! | GET    | `/check/{job_id}` | Poll a job, redirects to `/done` when set |
//! | GET    | `/done/{job_id}`  | Job result as plain text                  |
//! | GET    | `/health`         | Health check                              |
//! | GET    | `/api/logs`       | SSE stream for real-time logs             |
//!
//! Any other path, `/` included, is served from the static directory (the
//! built frontend). Uploads have no body size limit.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Html, IntoResponse, Json, Redirect, Response, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::Value;
use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::logs::{log_info, log_job, log_warning, LogLevel, LOG_BROADCASTER};
use super::pages;
use super::types::HealthResponse;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::jobs::{secure_filename, JobOutcome, JobStatus, JobStore};

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

type ApiError = (StatusCode, Json<Value>);

/// State shared by all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub jobs: JobStore,
}

pub type SharedState = Arc<AppState>;

/// Build the application router.
pub fn router(config: &ServerConfig) -> Router {
    let state = Arc::new(AppState {
        jobs: JobStore::new(&config.job_input_dir, &config.job_output_dir),
    });

    // CORS so the frontend dev server can post to us
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/form", get(upload_form))
        .route("/health", get(health))
        .route("/upload", post(upload_file).layer(DefaultBodyLimit::disable()))
        .route("/check/{job_id}", get(check_job))
        .route("/done/{job_id}", get(job_done))
        .route("/api/logs", get(sse_logs))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    println!("🚀 Logdrop server running on http://localhost:{}", config.port);
    println!("   GET  /                - Upload widget");
    println!("   GET  /form            - Plain upload form");
    println!("   POST /upload          - Upload a log file");
    println!("   GET  /check/{{job_id}}  - Job status");
    println!("   GET  /done/{{job_id}}   - Job result");
    println!("   GET  /api/logs        - SSE log stream");
    println!();
    println!("📂 Inputs:  {}", config.job_input_dir.display());
    println!("📂 Outputs: {}", config.job_output_dir.display());
    println!("📂 Static:  {}", config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_info(format!("Listening on {}", addr));
    axum::serve(listener, app).await?;

    Ok(())
}

async fn upload_form() -> Html<String> {
    Html(pages::upload_form("/upload"))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        // lagged receivers just skip ahead
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}

/// Store the uploaded file as a job and send the client to its check page.
async fn upload_file(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ServerError::BadRequest(format!("Multipart error: {}", e)).into_http()
    })? {
        // first `file` part wins
        if field.name() == Some(FILE_FIELD) && upload.is_none() {
            let name = field.file_name().unwrap_or_default().to_string();
            let bytes = field.bytes().await.map_err(|e| {
                ServerError::BadRequest(format!("Read error: {}", e)).into_http()
            })?;
            upload = Some((name, bytes.to_vec()));
        }
    }

    let (name, bytes) = upload.ok_or_else(|| reject("No file part"))?;
    // browsers send an empty part when nothing was selected
    if name.is_empty() {
        return Err(reject("No selected file"));
    }

    let filename = secure_filename(&name);
    let id = state
        .jobs
        .submit(&bytes)
        .await
        .map_err(|e| ServerError::from(e).into_http())?;

    log_job(
        LogLevel::Info,
        &id,
        format!(
            "📄 Stored {} ({} bytes) in {}",
            filename,
            bytes.len(),
            state.jobs.input_path(&id).display()
        ),
    );

    Ok(Redirect::to(&format!("/check/{}", id)))
}

fn reject(message: &str) -> ApiError {
    log_warning(format!("Upload rejected: {}", message));
    ServerError::BadRequest(message.to_string()).into_http()
}

async fn check_job(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = JobStore::parse_id(&job_id).map_err(|e| ServerError::from(e).into_http())?;

    let status = state
        .jobs
        .status(&id)
        .await
        .map_err(|e| ServerError::from(e).into_http())?;

    Ok(match status {
        JobStatus::Finished => Redirect::to(&format!("/done/{}", id)).into_response(),
        JobStatus::Running => Html(pages::job_running(&id)).into_response(),
    })
}

async fn job_done(
    State(state): State<SharedState>,
    Path(job_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = JobStore::parse_id(&job_id).map_err(|e| ServerError::from(e).into_http())?;

    let outcome = state
        .jobs
        .outcome(&id)
        .await
        .map_err(|e| ServerError::from(e).into_http())?;

    Ok(match outcome {
        JobOutcome::Completed(text) => {
            log_job(LogLevel::Success, &id, "Result delivered");
            ([(header::CONTENT_TYPE, "text/plain")], text).into_response()
        }
        JobOutcome::Failed(message) => {
            log_job(LogLevel::Error, &id, format!("Job failed: {}", message));
            format!("Error: {}", message).into_response()
        }
    })
}
