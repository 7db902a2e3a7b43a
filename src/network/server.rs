//! HTTP Server
//!
//! Binds the listener and serves the router until shutdown.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::config::Config;
use crate::engine::Engine;
use crate::error::Result;

use super::create_router;

/// HTTP server for transitboard
pub struct Server {
    config: Config,
    engine: Arc<Engine>,
    shutdown: Arc<Notify>,
}

impl Server {
    /// Create a new server with the given config and engine
    pub fn new(config: Config, engine: Arc<Engine>) -> Self {
        Self {
            config,
            engine,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Start the server (blocking)
    ///
    /// Builds the worker runtime, binds `listen_addr` and serves until
    /// Ctrl+C or `shutdown()`.
    pub fn run(&self) -> Result<()> {
        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.enable_all();
        if let Some(threads) = self.config.worker_threads {
            builder.worker_threads(threads);
        }
        let runtime = builder.build()?;

        let listener = runtime.block_on(TcpListener::bind(&self.config.listen_addr))?;
        runtime.block_on(self.serve(listener))
    }

    /// Serve on an already-bound listener
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        tracing::info!("Listening on {}", listener.local_addr()?);

        let app = create_router(Arc::clone(&self.engine));
        let shutdown = Arc::clone(&self.shutdown);

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown.notified() => {}
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Received Ctrl+C, initiating shutdown...");
                    }
                }
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}
