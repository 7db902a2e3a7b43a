//! transitboard Server Binary
//!
//! Loads the system document and starts the HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use transitboard::network::Server;
use transitboard::{Config, Engine};

/// transitboard Server
#[derive(Parser, Debug)]
#[command(name = "transitboard-server")]
#[command(about = "Transit stops, lines and live arrival times over HTTP")]
#[command(version)]
struct Args {
    /// System configuration file (JSON)
    #[arg(short, long)]
    config: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    listen: String,

    /// Directory holding the static HTML pages
    #[arg(short, long, default_value = "static")]
    static_dir: String,

    /// Worker threads (defaults to one per core)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Maximum request body size in KB
    #[arg(short = 'b', long, default_value = "1024")]
    max_body_kb: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,transitboard=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("transitboard Server v{}", transitboard::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let mut builder = Config::builder()
        .system_path(&args.config)
        .listen_addr(&args.listen)
        .static_dir(&args.static_dir)
        .max_body_bytes(args.max_body_kb * 1024);
    if let Some(workers) = args.workers {
        builder = builder.worker_threads(workers);
    }
    let config = builder.build();

    // Missing or malformed configuration is fatal
    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to load system: {}", e);
            std::process::exit(1);
        }
    };

    let server = Server::new(config, engine);
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
