use std::path::PathBuf;

use async_trait::async_trait;

use super::process::ProcessError;

/// Reports whether the daemon is running and which config file it uses.
#[async_trait]
pub trait ServiceInspector: Send + Sync {
    /// # Errors
    ///
    /// Returns `ProcessError` if the service manager cannot be queried in time.
    async fn is_active(&self) -> Result<bool, ProcessError>;

    /// Config file passed to the daemon on its command line, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError` if the service manager cannot be queried in time.
    async fn config_path(&self) -> Result<Option<PathBuf>, ProcessError>;
}
