//! Server instance management

use std::sync::Arc;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::handlers::{create_router, AppState};
use educore::ContentGenerator;

/// EduServe HTTP server
///
/// Manages the axum server lifecycle including startup validation and
/// graceful shutdown.
#[derive(Debug)]
pub struct EduServeServer {
    /// Server configuration
    config: ServerConfig,

    /// Shared content generator
    generator: Arc<ContentGenerator>,
}

impl EduServeServer {
    /// Create new server instance
    ///
    /// Fails fast when the configuration is invalid or the generation API
    /// credential is missing from the environment.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        if let Err(e) = config.validate() {
            return Err(ApiError::internal(format!("Invalid config: {}", e)));
        }

        if let Err(e) = ServerConfig::require_api_key() {
            error!("{}", e);
            return Err(ApiError::internal(e));
        }

        Ok(Self {
            config,
            generator: Arc::new(ContentGenerator::new()),
        })
    }

    /// Start server
    ///
    /// Binds the configured address and serves until a shutdown signal is
    /// received.
    pub async fn start(&self) -> Result<(), ApiError> {
        let addr = self
            .config
            .socket_addr()
            .map_err(ApiError::internal)?;

        let state = AppState::new(Arc::clone(&self.generator), self.config.clone());

        let app = create_router()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state);

        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind to {}: {:?}", addr, e);
            ApiError::internal(format!("Failed to bind to {}: {}", addr, e))
        })?;

        info!("Server listening on: {}", self.config.server_url());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::internal(format!("Server error: {}", e)))
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }
}

/// Resolve when a shutdown signal is received (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if signal::ctrl_c().await.is_err() {
            error!("Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
