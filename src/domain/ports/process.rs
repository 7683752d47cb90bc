use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Failure of an external command. A timeout is its own outcome, never a hang.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    #[error("command timed out after {0} ms")]
    Timeout(u64),
    #[error("failed to start command: {0}")]
    Spawn(String),
    #[error("command failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait TaskRunner: Send + Sync {
    /// Run the daemon's task listing and return its standard output.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the program cannot be started, exits with
    /// a failure status, or does not finish within its timeout.
    async fn run_tasks(&self, config_path: Option<&Path>) -> Result<String, ProcessError>;
}
