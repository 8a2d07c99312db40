//! HTTP surface of the overlay service.
//!
//! Routes:
//! - `GET /` - service metadata
//! - `GET /health` - liveness
//! - `GET /fonts` - discovered fonts and the default font
//! - `POST /overlay` - multipart upload, returns the composited JPEG
//!
//! Compositing is CPU-bound and runs on the blocking pool, bounded by the
//! configured request timeout.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::error::ServiceError;
use crate::fonts::{FontProvider, FontRegistry};
use crate::overlay::OverlayCompositor;

pub mod endpoints;
pub mod form;
pub mod handlers;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub compositor: OverlayCompositor,
    pub request_timeout: Duration,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(compositor: OverlayCompositor, request_timeout: Duration) -> Self {
        Self {
            compositor,
            request_timeout,
            start_time: Instant::now(),
        }
    }

    /// Discover fonts and build the compositor from configuration.
    pub fn from_config(config: &Config) -> Self {
        let registry = Arc::new(FontRegistry::discover(&config.fonts));
        let provider = Arc::new(FontProvider::from_config(registry, &config.fonts));
        Self::new(
            OverlayCompositor::new(provider),
            Duration::from_secs(config.server.request_timeout),
        )
    }
}

/// Build the application router
pub fn build_router(state: AppState, max_body_size: usize) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/fonts", get(handlers::fonts))
        .route("/overlay", post(handlers::overlay))
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_body_size))
}

/// Serve `router` on an already-bound listener until ctrl-c.
pub async fn serve(listener: TcpListener, router: Router) -> Result<(), ServiceError> {
    let address = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServiceError::Server { address, source })
}

/// Bind the configured address and serve until shutdown.
pub async fn run(config: Config) -> Result<(), ServiceError> {
    config.validate().map_err(ServiceError::Config)?;

    let state = AppState::from_config(&config);
    let router = build_router(state, config.server.max_body_size);

    let address = config.server.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServiceError::Server {
            address: address.clone(),
            source,
        })?;

    tracing::info!(
        address = %address,
        request_timeout_secs = config.server.request_timeout,
        max_body_size = config.server.max_body_size,
        "Starting quote overlay service"
    );

    serve(listener, router).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
