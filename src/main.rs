//! Vanity import path server.
//!
//! # Architecture Overview
//!
//! ```text
//!     vanity.toml ──▶ config (load, validate, watch)
//!                         │
//!                         ▼
//!                  vanity::Site  (RuleSet<VanityEntry>, host, cache)
//!                         │  ArcSwap, replaced whole on reload
//!                         ▼
//!     GET /portmidi ──▶ http server ──▶ RuleSet::find ──▶ go-import page
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use vanity_server::config::{load_config, watcher::ConfigWatcher};
use vanity_server::http::HttpServer;
use vanity_server::lifecycle::{signals, Shutdown};
use vanity_server::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "vanity-server")]
#[command(about = "Serves go-import metadata for vanity import paths", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "vanity.toml")]
    config: PathBuf,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Do not reload the configuration when the file changes.
    #[arg(long)]
    no_watch: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = load_config(&cli.config)?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability.log_level);
    tracing::info!("vanity-server v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        config = ?cli.config,
        bind_address = %config.listener.bind_address,
        paths = config.paths.len(),
        path_rules = config.path_rules.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // Keep the watcher alive for the lifetime of the server.
    let (_watcher, config_updates) = if cli.no_watch {
        let (_tx, rx) = mpsc::unbounded_channel();
        (None, rx)
    } else {
        let (watcher, rx) = ConfigWatcher::new(&cli.config);
        (Some(watcher.run()?), rx)
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    server.run(listener, config_updates, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
