//! REST API for planning trips.
//!
//! Provides two endpoints:
//! - `POST /api/plan-trip` — validates a trip request and returns the
//!   full HOS-compliant schedule
//! - `GET /api/health` — liveness probe

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};

/// Builds the axum router with all API routes.
///
/// Stateless: every request is computed fresh from its own payload, so
/// there is no shared application state to thread through handlers.
pub fn router() -> Router {
    Router::new()
        .route("/api/plan-trip", post(handlers::plan_trip))
        .route("/api/health", get(handlers::health))
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(addr: SocketAddr) {
    let app = router();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
