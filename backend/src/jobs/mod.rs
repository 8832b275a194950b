//! Job store - uploaded files waiting for (or processed by) the worker.
//!
//! Each upload becomes a job named by a fresh UUID. The payload is written
//! to `<input_dir>/<job_id>`; an external worker writes its result to
//! `<output_dir>/<job_id>`. A job is finished as soon as its output file
//! exists.

mod filename;
mod outcome;

pub use filename::secure_filename;
pub use outcome::JobOutcome;

use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::error::{JobError, JobResult};

/// Whether the worker has produced output for a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Running,
    Finished,
}

/// File-backed job directories.
#[derive(Debug, Clone)]
pub struct JobStore {
    input_dir: PathBuf,
    output_dir: PathBuf,
}

impl JobStore {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Parse a job id coming from a URL path.
    ///
    /// Only UUIDs are accepted, so an id can never point outside the job
    /// directories.
    pub fn parse_id(raw: &str) -> JobResult<Uuid> {
        Uuid::parse_str(raw).map_err(|_| JobError::InvalidId(raw.to_string()))
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn input_path(&self, id: &Uuid) -> PathBuf {
        self.input_dir.join(id.to_string())
    }

    pub fn output_path(&self, id: &Uuid) -> PathBuf {
        self.output_dir.join(id.to_string())
    }

    /// Store an uploaded payload as a new job and return its id.
    pub async fn submit(&self, payload: &[u8]) -> JobResult<Uuid> {
        let id = Uuid::new_v4();
        fs::create_dir_all(&self.input_dir).await?;
        fs::write(self.input_path(&id), payload).await?;
        Ok(id)
    }

    pub async fn status(&self, id: &Uuid) -> JobResult<JobStatus> {
        if fs::try_exists(self.output_path(id)).await? {
            Ok(JobStatus::Finished)
        } else {
            Ok(JobStatus::Running)
        }
    }

    /// Read and interpret a finished job's output.
    pub async fn outcome(&self, id: &Uuid) -> JobResult<JobOutcome> {
        let bytes = match fs::read(self.output_path(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(JobError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(JobOutcome::parse(&String::from_utf8_lossy(&bytes)))
    }
}
