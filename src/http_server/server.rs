//! # HTTP Server
//!
//! Combines the user routes and the health check into one router and
//! serves it. Request handling is fully delegated to the hosting runtime's
//! dispatcher; the server holds no mutable state of its own.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::user_routes::{user_routes, UserState};
use crate::config::ServerConfig;
use crate::usecase::UserUseCase;

/// HTTP server for the user roster API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new server wired to the given use-case
    pub fn new(config: ServerConfig, usecase: Arc<dyn UserUseCase>) -> Self {
        let router = Self::build_router(usecase);
        Self { config, router }
    }

    /// Build the combined router
    fn build_router(usecase: Arc<dyn UserUseCase>) -> Router {
        let state = Arc::new(UserState { usecase });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Health check at root level
            .route("/health", get(health_handler))
            // User routes under the versioned base path
            .nest("/api/v1", user_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the configured bind address
    pub fn bind_address(&self) -> &str {
        &self.config.address
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(&self.config.address).await?;
        tracing::info!(address = %self.config.address, "http server listening");
        axum::serve(listener, self.router).await
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
