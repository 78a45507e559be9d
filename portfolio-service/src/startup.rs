//! Application startup and lifecycle management.
//!
//! [`build_router`] is the whole HTTP surface and can be mounted by an
//! embedding host; [`Application`] binds it to a socket for standalone runs.

use crate::config::PortfolioConfig;
use crate::handlers;
use crate::services::providers::gemini::GeminiChatProvider;
use crate::services::providers::ChatProvider;
use crate::services::{Catalog, ChatRelay};
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics_middleware, request_id_middleware, security_headers_middleware, REQUEST_ID_HEADER,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: PortfolioConfig,
    pub catalog: Arc<Catalog>,
    pub chat: ChatRelay,
}

impl AppState {
    /// State for a deployment: seeded catalog, Gemini when a key is set.
    pub fn from_config(config: PortfolioConfig) -> Result<Self, AppError> {
        let chat = match config.gemini_provider_config() {
            Some(gemini_config) => {
                let model = gemini_config.model.clone();
                let provider: Arc<dyn ChatProvider> = Arc::new(
                    GeminiChatProvider::new(gemini_config)
                        .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?,
                );
                tracing::info!(model = %model, "Initialized Gemini chat provider");
                ChatRelay::new(provider)
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not set; /api/chat will answer with 500");
                ChatRelay::unconfigured()
            }
        };

        Ok(Self {
            config,
            catalog: Arc::new(Catalog::seeded()),
            chat,
        })
    }
}

/// All routes with CORS open to every origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api", get(handlers::api_status))
        .route("/api/personal-info", get(handlers::personal_info))
        .route("/api/tech-stacks", get(handlers::tech_stacks))
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/seo-settings", get(handlers::seo_settings))
        .route("/api/chat", post(handlers::chat))
        .route_layer(from_fn(metrics_middleware))
        .fallback(handlers::not_found)
        // Add tracing layer
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        // Add tracing middleware for request_id
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: PortfolioConfig) -> Result<Self, AppError> {
        let state = AppState::from_config(config)?;
        Self::build_with_state(state).await
    }

    /// Bind `state`'s router on the configured port (0 = random, for tests).
    pub async fn build_with_state(state: AppState) -> Result<Self, AppError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], state.config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Portfolio API listening on port {}", port);

        Ok(Self {
            port,
            listener,
            router: build_router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    tracing::info!("Shutdown signal received");
}
