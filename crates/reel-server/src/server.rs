use std::future::Future;
use std::sync::Arc;

use reel_gate::ValidationGate;
use reel_store::{InMemoryMovieStore, MovieStore};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::dispatch::MovieService;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// The movie resource server.
///
/// Each server owns its own store; nothing is shared through globals.
pub struct ReelServer {
    config: ServerConfig,
    service: Arc<MovieService>,
}

impl ReelServer {
    /// A server over a fresh, empty in-memory store.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        Self::with_store(config, Arc::new(InMemoryMovieStore::new()))
    }

    /// A server over the given store.
    pub fn with_store(config: ServerConfig, store: Arc<dyn MovieStore>) -> ServerResult<Self> {
        config.check()?;
        let gate = ValidationGate::with_default_stages(config.gate.clone());
        Ok(Self {
            config,
            service: Arc::new(MovieService::new(store, gate)),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn service(&self) -> &Arc<MovieService> {
        &self.service
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(Arc::clone(&self.service))
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for ctrl-c: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("reel server listening on {}", listener.local_addr()?);
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("reel server stopped");
        Ok(())
    }
}
