//! Command-line entry point for the issue exporter.
//!
//! Configuration comes from the environment; the CLI only controls where the
//! scrape endpoint listens and when the first poll happens.

use std::{net::SocketAddr, process, sync::Arc};

use clap::Parser;
use gime::{Error, GithubIssueSource, Scheduler, Settings, SnapshotStore, serve};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Export open GitHub issues as Prometheus gauge series.
#[derive(Debug, Parser,)]
#[command(name = "gime", version, about = "Export open GitHub issues as Prometheus metrics")]
struct Cli
{
    /// Address the metrics endpoint listens on.
    #[arg(long = "listen", env = "LISTEN_ADDR", value_name = "ADDR", default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Poll once at startup instead of waiting for the first interval.
    #[arg(long = "poll-on-start", env = "POLL_ON_START")]
    poll_on_start: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info",),),
        )
        .init();

    if let Err(e,) = run(Cli::parse(),).await {
        error!(kind = ?e.kind(), "{}", e.to_display_string());
        process::exit(1,);
    }
}

/// Resolves configuration and runs the poller alongside the scrape endpoint.
///
/// # Errors
///
/// Returns configuration errors before anything starts, and otherwise the
/// first error reported by either the poller or the endpoint.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let settings = Settings::from_env()?;
    info!(?settings, listen = %cli.listen, "configuration resolved");

    let source = GithubIssueSource::new(&settings.auth_token, settings.api_base_url.as_deref(),)?;
    let store = Arc::new(SnapshotStore::new(),);
    let scheduler = Scheduler::new(
        source,
        settings.repositories,
        settings.label,
        Arc::clone(&store,),
        settings.poll_interval,
    )
    .poll_on_start(cli.poll_on_start,);

    tokio::select! {
        result = scheduler.run() => result.map(|_| (),),
        result = serve(cli.listen, store,) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupt received, shutting down");
            Ok((),)
        }
    }
}
