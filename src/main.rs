//! Server-side rendering server.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────────────────┐
//!                     │                        SSR SERVER                        │
//!                     │                                                          │
//!   Client Request    │  ┌──────────┐   file?   ┌──────────────────────────────┐ │
//!   ──────────────────┼─▶│ ServeDir │── yes ───▶│ public/ (built assets)       │ │
//!                     │  └────┬─────┘           └──────────────────────────────┘ │
//!                     │       │ no                                               │
//!                     │       ▼                                                  │
//!                     │  ┌──────────┐   ┌──────────┐   ┌──────────┐              │
//!                     │  │ routing  │──▶│  render  │──▶│ compose  │◀── manifest  │
//!                     │  │ resolver │   │  engine  │   │ document │              │
//!                     │  └──────────┘   └──────────┘   └────┬─────┘              │
//!                     │                                     ▼                    │
//!   Client Response   │                              ┌────────────┐              │
//!   ◀─────────────────┼──────────────────────────────│ dispatcher │              │
//!                     │                              └────────────┘              │
//!                     └──────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use ssr_server::config::{load_config, ServerConfig, PORT_ENV};
use ssr_server::http::HttpServer;
use ssr_server::lifecycle::{build_dispatcher, prepare_config, signals, Shutdown, StartupError};
use ssr_server::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "ssr-server")]
#[command(about = "Server-side rendering server", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `assets.manifest_path`.
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Override `assets.public_dir`.
    #[arg(long)]
    public_dir: Option<PathBuf>,

    /// Validate configuration and manifest, then exit.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => load_config(path).map_err(StartupError::Config)?,
        None => ServerConfig::default(),
    };
    if let Some(manifest) = cli.manifest {
        config.assets.manifest_path = manifest;
    }
    if let Some(public_dir) = cli.public_dir {
        config.assets.public_dir = public_dir;
    }
    let port_override = std::env::var(PORT_ENV).ok();
    let config = prepare_config(config, port_override.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ssr-server starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        manifest = %config.assets.manifest_path.display(),
        public_dir = %config.assets.public_dir.display(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let dispatcher = match build_dispatcher(&config) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    if cli.check {
        tracing::info!("Configuration and asset manifest are valid");
        return Ok(());
    }

    if let Some(ref addr) = config.observability.metrics_address {
        match addr.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(metrics_address = %addr, "Failed to parse metrics address"),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(StartupError::Bind)?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_shutdown_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config, dispatcher)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
