use std::time::Duration;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use nohang_indicator::application::config::AppConfig;
use nohang_indicator::application::daemon_config::DaemonConfigCache;
use nohang_indicator::application::services::monitor::StatusMonitor;
use nohang_indicator::domain::ports::notifier::Notifier;
use nohang_indicator::infrastructure::collectors::procfs::ProcfsCollector;
use nohang_indicator::infrastructure::notifications::desktop::DesktopNotifier;
use nohang_indicator::infrastructure::notifications::severity_change::SeverityChangeNotifier;
use nohang_indicator::infrastructure::os::systemd::SystemdInspector;
use nohang_indicator::infrastructure::os::tasks::NohangTaskRunner;
use nohang_indicator::presentation::cli::app::{Cli, Commands};
use nohang_indicator::presentation::cli::commands::status::run_status;
use nohang_indicator::presentation::cli::commands::tasks::run_tasks;
use nohang_indicator::presentation::cli::commands::watch::{WatchIntervals, run_watch};

fn print_banner(unit: &str) {
    println!("{}", "━".repeat(40).cyan());
    println!("{}", format!("  nohang-indicator: {unit}").bold().cyan());
    println!("{}", "━".repeat(40).cyan());
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    // Manual DI: main.rs is the only place that knows concrete types
    let collector = ProcfsCollector::new(
        config.sources.proc_root.clone(),
        config.sources.sys_root.clone(),
    );
    let inspector = SystemdInspector::new(
        config.daemon.unit.clone(),
        config.daemon.command_timeout(),
    );
    let mut cache = DaemonConfigCache::new(
        config.daemon.default_config.clone(),
        config.daemon.fallback_config.clone(),
    );

    match cli.command {
        Some(Commands::Status { json }) => {
            let mut monitor = StatusMonitor::new(&collector, &inspector, cache);
            run_status(&mut monitor, json).await?;
        }
        Some(Commands::Tasks) => {
            let runner = NohangTaskRunner::new(
                config.daemon.program.clone(),
                config.daemon.tasks_timeout(),
            );
            run_tasks(&runner, &inspector, &mut cache).await?;
        }
        Some(Commands::Watch { interval }) => {
            let poll = interval.map(|secs| Duration::from_secs(secs.max(1)));
            watch(&config, &collector, &inspector, cache, poll).await?;
        }
        None => {
            watch(&config, &collector, &inspector, cache, None).await?;
        }
    }

    Ok(())
}

async fn watch(
    config: &AppConfig,
    collector: &ProcfsCollector,
    inspector: &SystemdInspector,
    cache: DaemonConfigCache,
    poll: Option<Duration>,
) -> anyhow::Result<()> {
    print_banner(&config.daemon.unit);

    let notifier = config
        .notifications
        .desktop
        .then(|| SeverityChangeNotifier::new(Box::new(DesktopNotifier::new())));
    let intervals = WatchIntervals {
        poll: poll.unwrap_or_else(|| config.general.poll_interval()),
        config_watch: config.general.config_watch_interval(),
    };

    let mut monitor = StatusMonitor::new(collector, inspector, cache);
    run_watch(
        &mut monitor,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        intervals,
    )
    .await
}
