use std::future::Future;
use std::time::Duration;

use crate::application::services::monitor::StatusMonitor;
use crate::domain::entities::status::StatusUpdate;
use crate::domain::ports::notifier::Notifier;
use crate::presentation::cli::formatters::status_fmt::print_status;

/// Refresh cadence of the watch loop.
#[derive(Debug, Clone, Copy)]
pub struct WatchIntervals {
    pub poll: Duration,
    pub config_watch: Duration,
}

/// Run the watch loop until Ctrl+C.
///
/// A full refresh runs every `poll`; the cheaper config-change check runs
/// every `config_watch` and republishes only when the daemon config changed.
///
/// # Errors
///
/// Returns an error if the Ctrl+C handler cannot be installed.
pub async fn run_watch(
    monitor: &mut StatusMonitor<'_>,
    notifier: Option<&dyn Notifier>,
    intervals: WatchIntervals,
) -> anyhow::Result<()> {
    tracing::info!(
        "watching (refresh {}s, config check {}s)",
        intervals.poll.as_secs(),
        intervals.config_watch.as_secs()
    );
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("cannot listen for Ctrl+C: {e}");
        }
    };
    let published = watch_until(monitor, notifier, intervals, shutdown).await;
    tracing::info!("shutting down after {published} update(s)");
    Ok(())
}

/// Loop body of [`run_watch`], stopping when `shutdown` resolves.
/// Returns the number of updates published.
pub async fn watch_until(
    monitor: &mut StatusMonitor<'_>,
    notifier: Option<&dyn Notifier>,
    intervals: WatchIntervals,
    shutdown: impl Future<Output = ()>,
) -> usize {
    let mut poll = tokio::time::interval(intervals.poll);
    poll.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut config_watch = tokio::time::interval(intervals.config_watch);
    config_watch.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    // The first config check would only repeat the initial refresh.
    config_watch.reset();

    tokio::pin!(shutdown);
    let mut published = 0usize;

    loop {
        tokio::select! {
            _ = poll.tick() => {
                let update = monitor.tick().await;
                publish(&update, notifier);
                published += 1;
            }
            _ = config_watch.tick() => {
                if let Some(update) = monitor.check_config() {
                    publish(&update, notifier);
                    published += 1;
                }
            }
            () = &mut shutdown => {
                tracing::info!("shutdown signal received");
                break;
            }
        }
    }
    published
}

fn publish(update: &StatusUpdate, notifier: Option<&dyn Notifier>) {
    tracing::debug!(severity = %update.severity, active = update.active, "status refreshed");
    println!();
    print_status(update);
    if let Some(notifier) = notifier {
        if let Err(e) = notifier.notify(update) {
            tracing::warn!("status notification failed: {e}");
        }
    }
}
