use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nexus_core::{Config, ExternalSources, HttpClient, ReqwestHttpClient, SnapshotService};
use nexus_web::{router, AppState};

const CACHE_SWEEP_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Parser)]
#[command(name = "nexusd", about = "Haunted Nexus demo backend")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:5000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    let args = Args::parse();
    let config = Config::from_env();

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let state = AppState {
        sources: Arc::new(ExternalSources::new(http.clone(), &config)),
        snapshots: Arc::new(SnapshotService::new(http)),
    };

    spawn_cache_sweeper(&state);

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, "nexusd listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodic housekeeping over both caches. Lazy expiry on read keeps results
/// correct either way; this bounds memory under many distinct snapshot URLs.
fn spawn_cache_sweeper(state: &AppState) {
    let sources = state.sources.clone();
    let snapshots = state.snapshots.clone();
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(CACHE_SWEEP_INTERVAL);
        loop {
            tick.tick().await;
            sources.purge_expired().await;
            snapshots.purge_expired().await;
        }
    });
}
