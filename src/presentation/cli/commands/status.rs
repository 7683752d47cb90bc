use crate::application::services::monitor::StatusMonitor;
use crate::presentation::cli::formatters::status_fmt::print_status;

/// Runs one full refresh and prints the result.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub async fn run_status(monitor: &mut StatusMonitor<'_>, json: bool) -> anyhow::Result<()> {
    let update = monitor.tick().await;

    if json {
        println!("{}", serde_json::to_string_pretty(&update)?);
    } else {
        print_status(&update);
    }
    Ok(())
}
