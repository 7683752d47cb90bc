use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use super::command::run_checked;
use crate::domain::ports::process::{ProcessError, TaskRunner};

/// Runs `nohang --tasks`, the daemon's own view of its kill candidates.
pub struct NohangTaskRunner {
    program: String,
    timeout: Duration,
}

impl NohangTaskRunner {
    #[must_use]
    pub const fn new(program: String, timeout: Duration) -> Self {
        Self { program, timeout }
    }
}

#[async_trait]
impl TaskRunner for NohangTaskRunner {
    async fn run_tasks(&self, config_path: Option<&Path>) -> Result<String, ProcessError> {
        let config = config_path.map(|p| p.to_string_lossy().into_owned());
        let mut args = vec!["--tasks"];
        if let Some(ref config) = config {
            args.extend(["-c", config.as_str()]);
        }
        run_checked(&self.program, &args, self.timeout).await
    }
}
