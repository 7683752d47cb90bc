use anyhow::Context;

use crate::application::daemon_config::DaemonConfigCache;
use crate::domain::ports::process::TaskRunner;
use crate::domain::ports::service::ServiceInspector;
use crate::presentation::cli::formatters::status_fmt::print_section_header;

/// Prints `nohang --tasks` for the config the running daemon uses.
///
/// The config is resolved like the status report's: the unit's `--config`,
/// then the default file, then the distribution fallback.
///
/// # Errors
///
/// Returns an error if the task listing times out or fails.
pub async fn run_tasks(
    runner: &dyn TaskRunner,
    inspector: &dyn ServiceInspector,
    cache: &mut DaemonConfigCache,
) -> anyhow::Result<()> {
    let output = tasks_output(runner, inspector, cache).await?;
    print_section_header("nohang --tasks");
    println!("{}", output.trim_end());
    Ok(())
}

async fn tasks_output(
    runner: &dyn TaskRunner,
    inspector: &dyn ServiceInspector,
    cache: &mut DaemonConfigCache,
) -> anyhow::Result<String> {
    let requested = inspector.config_path().await.unwrap_or_else(|e| {
        tracing::warn!("cannot query daemon config path: {e}");
        None
    });
    cache.ensure_parsed(requested.as_deref());
    runner
        .run_tasks(cache.source_path())
        .await
        .context("Failed to list nohang tasks")
}
