use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use async_trait::async_trait;

use super::command::{run_checked, run_with_timeout};
use crate::domain::ports::process::ProcessError;
use crate::domain::ports::service::ServiceInspector;

/// Queries `systemctl` for the daemon unit.
///
/// The config path is looked up once and cached, the unit's command line
/// does not change while it is loaded.
pub struct SystemdInspector {
    unit: String,
    timeout: Duration,
    cached_config: OnceLock<Option<PathBuf>>,
}

impl SystemdInspector {
    #[must_use]
    pub const fn new(unit: String, timeout: Duration) -> Self {
        Self {
            unit,
            timeout,
            cached_config: OnceLock::new(),
        }
    }
}

#[async_trait]
impl ServiceInspector for SystemdInspector {
    async fn is_active(&self) -> Result<bool, ProcessError> {
        let output =
            run_with_timeout("systemctl", &["is-active", self.unit.as_str()], self.timeout).await?;
        Ok(output.status.success())
    }

    async fn config_path(&self) -> Result<Option<PathBuf>, ProcessError> {
        if let Some(cached) = self.cached_config.get() {
            return Ok(cached.clone());
        }

        let exec = run_checked(
            "systemctl",
            &["show", self.unit.as_str(), "-p", "ExecStart"],
            self.timeout,
        )
        .await;
        self.remember(exec)
    }
}

impl SystemdInspector {
    /// Caches the outcome of an `ExecStart` query.
    ///
    /// A timeout stays uncached so the next poll retries. Any other failure,
    /// such as a unit that is not installed, is reported once and then
    /// remembered as "no config flag".
    fn remember(
        &self,
        exec: Result<String, ProcessError>,
    ) -> Result<Option<PathBuf>, ProcessError> {
        let path = match exec {
            Ok(exec) => parse_config_from_exec(&exec),
            Err(e @ ProcessError::Timeout(_)) => return Err(e),
            Err(e) => {
                let _ = self.cached_config.set(None);
                return Err(e);
            }
        };
        tracing::debug!(unit = %self.unit, config = ?path, "resolved daemon config path");
        Ok(self.cached_config.get_or_init(|| path).clone())
    }
}

/// Extracts the config file from a `systemctl show -p ExecStart` value.
///
/// Recognizes `--config <path>`, `--config=<path>` and `-c <path>`.
#[must_use]
pub fn parse_config_from_exec(exec_start: &str) -> Option<PathBuf> {
    let mut tokens = exec_start.split_whitespace();
    while let Some(token) = tokens.next() {
        if let Some(path) = token.strip_prefix("--config=") {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        } else if token == "--config" || token == "-c" {
            return tokens
                .next()
                .filter(|next| *next != ";")
                .map(PathBuf::from);
        }
    }
    None
}
