//! Server configuration.
//!
//! Job directories come from the environment (a `.env` file is loaded
//! by the binary first); port and static directory come from the CLI.

use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// Directory the uploaded payloads are written to.
pub const JOB_INPUT_DIR_VAR: &str = "JOB_INPUT_DIR";

/// Directory the worker writes job results to.
pub const JOB_OUTPUT_DIR_VAR: &str = "JOB_OUTPUT_DIR";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default location of the built frontend.
pub const DEFAULT_STATIC_DIR: &str = "frontend/dist";

/// Seconds between refreshes of the "job running" page.
pub const CHECK_REFRESH_SECS: u32 = 3;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub job_input_dir: PathBuf,
    pub job_output_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build from the process environment.
    pub fn from_env(port: u16, static_dir: impl Into<PathBuf>) -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok(), port, static_dir)
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, port: u16, static_dir: impl Into<PathBuf>) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let dir = |name: &'static str| -> ConfigResult<PathBuf> {
            match lookup(name) {
                None => Err(ConfigError::MissingVar(name)),
                Some(value) if value.trim().is_empty() => {
                    Err(ConfigError::InvalidVar { name, value })
                }
                Some(value) => Ok(PathBuf::from(value)),
            }
        };

        Ok(Self {
            port,
            job_input_dir: dir(JOB_INPUT_DIR_VAR)?,
            job_output_dir: dir(JOB_OUTPUT_DIR_VAR)?,
            static_dir: static_dir.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_reads_job_dirs() {
        let config = ServerConfig::from_lookup(
            lookup(&[(JOB_INPUT_DIR_VAR, "/srv/in"), (JOB_OUTPUT_DIR_VAR, "/srv/out")]),
            8080,
            DEFAULT_STATIC_DIR,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.job_input_dir, PathBuf::from("/srv/in"));
        assert_eq!(config.job_output_dir, PathBuf::from("/srv/out"));
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
    }

    #[test]
    fn test_missing_output_dir() {
        let err = ServerConfig::from_lookup(
            lookup(&[(JOB_INPUT_DIR_VAR, "/srv/in")]),
            DEFAULT_PORT,
            DEFAULT_STATIC_DIR,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingVar(JOB_OUTPUT_DIR_VAR)));
        assert!(err.to_string().contains("JOB_OUTPUT_DIR"));
    }

    #[test]
    fn test_blank_dir_rejected() {
        let err = ServerConfig::from_lookup(
            lookup(&[(JOB_INPUT_DIR_VAR, "  "), (JOB_OUTPUT_DIR_VAR, "/srv/out")]),
            DEFAULT_PORT,
            DEFAULT_STATIC_DIR,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidVar { .. }));
    }
}
