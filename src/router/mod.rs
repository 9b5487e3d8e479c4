//! Routing module for the cookie jar service

use crate::config::ServerConfig;
use crate::jar::state::{AppState, SharedState};
use axum::{body::Body, extract::Request, middleware::Next, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        debug!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(crate::jar::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the configured address and serves jars until the process stops.
///
/// # Errors
///
/// Returns an error if the address is invalid or cannot be bound.
pub async fn run_server(config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let app = create_app_router(Arc::new(AppState::new()));

    info!("Cookie jar service running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
