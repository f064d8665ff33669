//! Ingress Diagnostic Backend
//!
//! An HTTP reflector deployed behind ingress controllers and reverse proxies
//! to make their behavior observable: session-affinity cookies, CORS header
//! propagation, injected security headers, redirects, proxy timeouts, upload
//! pass-through, and request metadata.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               INGRESS PROBE                   │
//!                    │                                               │
//!   Ingress /        │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   Reverse Proxy ───┼─▶│  http   │───▶│  probes  │───▶│dashboard│  │
//!                    │  │ server  │    │ handlers │    │renderer │  │
//!                    │  └─────────┘    └──────────┘    └─────────┘  │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌──────────┐ ┌───────────┐  │ │
//!                    │  │  │ config │ │ tracing  │ │ lifecycle │  │ │
//!                    │  │  └────────┘ └──────────┘ └───────────┘  │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every handler is stateless and request-scoped; the only process-wide value
//! is the controller name resolved from configuration at startup.

pub mod config;
pub mod dashboard;
pub mod http;
pub mod lifecycle;
pub mod probes;

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::loader::load_config;
use crate::config::ProbeConfig;
use crate::http::HttpServer;
use crate::lifecycle::Shutdown;

#[derive(Parser)]
#[command(name = "ingress-probe")]
#[command(about = "Diagnostic HTTP backend for ingress controller testing", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ingress_probe=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ingress-probe v0.1.0 starting");

    let cli = Cli::parse();

    // Load configuration; CONTROLLER_NAME from the environment wins over the file.
    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => ProbeConfig::default(),
    };
    let config = config.with_env_overrides();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        controller_name = %config.controller_name,
        dashboard_mode = ?config.dashboard.mode,
        max_timeout_secs = config.timeout.max_seconds,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
