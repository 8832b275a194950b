//! Logdrop CLI
//!
//! ```bash
//! logdrop serve                   # Start HTTP server (port 5000)
//! logdrop status <job_id>         # Is the job finished?
//! logdrop result <job_id>         # Print a finished job's result
//! ```
//!
//! `JOB_INPUT_DIR` and `JOB_OUTPUT_DIR` must be set (a `.env` file works).

use clap::{Parser, Subcommand};
use logdrop::config::{DEFAULT_PORT, DEFAULT_STATIC_DIR};
use logdrop::{JobOutcome, JobStatus, JobStore, ServerConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logdrop")]
#[command(about = "Receive Google Analytics log uploads and serve job results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory holding the built frontend
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,
    },

    /// Show whether a job has finished
    Status {
        /// Job ID
        job_id: String,
    },

    /// Print the result of a finished job
    Result {
        /// Job ID
        job_id: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port, static_dir } => cmd_serve(port, static_dir).await,
        Commands::Status { job_id } => cmd_status(&job_id).await,
        Commands::Result { job_id } => cmd_result(&job_id).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: u16, static_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env(port, static_dir)?;
    logdrop::server::start_server(config).await
}

fn job_store() -> Result<JobStore, Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env(DEFAULT_PORT, DEFAULT_STATIC_DIR)?;
    Ok(JobStore::new(config.job_input_dir, config.job_output_dir))
}

async fn cmd_status(job_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = job_store()?;
    let id = JobStore::parse_id(job_id)?;

    match store.status(&id).await? {
        JobStatus::Finished => println!("✅ Job {} finished", id),
        JobStatus::Running => {
            let queued = tokio::fs::try_exists(store.input_path(&id)).await?;
            if queued {
                println!("⏳ Job {} running", id);
            } else {
                println!("❔ Job {} unknown", id);
            }
        }
    }
    Ok(())
}

async fn cmd_result(job_id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = job_store()?;
    let id = JobStore::parse_id(job_id)?;

    match store.outcome(&id).await? {
        JobOutcome::Completed(text) => {
            print!("{}", text);
            Ok(())
        }
        JobOutcome::Failed(message) => Err(format!("Job {} failed: {}", id, message).into()),
    }
}
