use std::process::Output;
use std::time::Duration;

use crate::domain::ports::process::ProcessError;

/// Maximum stderr bytes included in error messages.
const MAX_STDERR_BYTES: usize = 512;

/// Runs `program args...` to completion, killing it once `timeout` expires.
///
/// # Errors
///
/// `ProcessError::Timeout` on expiry, `ProcessError::Spawn` if the program
/// cannot be started.
pub async fn run_with_timeout(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<Output, ProcessError> {
    tracing::debug!("running {program} {}", args.join(" "));
    tokio::time::timeout(
        timeout,
        tokio::process::Command::new(program)
            .args(args)
            .kill_on_drop(true)
            .output(),
    )
    .await
    .map_err(|_| ProcessError::Timeout(millis(timeout)))?
    .map_err(|e| ProcessError::Spawn(format!("{program}: {e}")))
}

/// Like [`run_with_timeout`] but also rejects a non-zero exit status.
///
/// # Errors
///
/// Everything [`run_with_timeout`] returns, plus `ProcessError::Failed`
/// carrying the start of stderr.
pub async fn run_checked(
    program: &str,
    args: &[&str],
    timeout: Duration,
) -> Result<String, ProcessError> {
    let output = run_with_timeout(program, args, timeout).await?;
    if !output.status.success() {
        let stderr =
            String::from_utf8_lossy(&output.stderr[..output.stderr.len().min(MAX_STDERR_BYTES)]);
        return Err(ProcessError::Failed(format!(
            "{program} exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn millis(timeout: Duration) -> u64 {
    u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX)
}
