use clap::Parser;
use keywatch_domain::config::CliOverrides;
use keywatch_jobs::{CollectionJob, JobRunner};
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "keywatch")]
#[command(version)]
#[command(about = "keywatch - DNSKEY monitoring probe")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Seconds between collection passes
    #[arg(short = 'i', long)]
    interval: Option<u64>,

    /// Query timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Run a single collection pass and exit
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        interval_secs: cli.interval,
        timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting keywatch v{}", env!("CARGO_PKG_VERSION"));

    let collector = di::build_collector(&config);

    if cli.once {
        let outcome = collector.execute().await?;
        info!(
            domains = outcome.domains_queried,
            records = outcome.records_emitted,
            "Collection pass completed"
        );
        return Ok(());
    }

    let shutdown = CancellationToken::new();

    JobRunner::new()
        .with_collection(
            CollectionJob::new(collector).with_interval(config.collector.interval_secs),
        )
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutting down");
    shutdown.cancel();

    Ok(())
}
