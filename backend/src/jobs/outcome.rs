//! Interpretation of a finished job's output file.

/// Marker written by the worker on the first line of a failed job.
const ERROR_MARKER: &str = "ERROR MESSAGE";

/// What a finished job produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// The worker produced a result; the full output text.
    Completed(String),
    /// The worker reported a failure; the cleaned-up message.
    Failed(String),
}

impl JobOutcome {
    /// Parse the raw content of an output file.
    ///
    /// An empty file is a failure. A first line starting with
    /// `ERROR MESSAGE` is a failure whose message is the rest of that
    /// line, minus a leading `": "` and then a leading `"ERROR: "`.
    /// A marker with nothing after it does not count as a failure.
    pub fn parse(output: &str) -> Self {
        if output.is_empty() {
            return JobOutcome::Failed("Job failed. Result is empty".to_string());
        }

        let first_line = output.lines().next().unwrap_or_default();
        match first_line.strip_prefix(ERROR_MARKER) {
            Some(rest) => {
                let rest = rest.strip_prefix(": ").unwrap_or(rest);
                let rest = rest.strip_prefix("ERROR: ").unwrap_or(rest);
                if rest.is_empty() {
                    JobOutcome::Completed(output.to_string())
                } else {
                    JobOutcome::Failed(rest.to_string())
                }
            }
            None => JobOutcome::Completed(output.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, JobOutcome::Failed(_))
    }
}
