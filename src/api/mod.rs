//! JSON read API over a completed scheduling run.
//!
//! Provides two GET endpoints:
//! - `/forecast` — the generated series with optional range filtering
//! - `/recommendation` — optimal window, savings, and next green hour

mod handlers;
mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;

use crate::forecast::types::TimePoint;
use crate::sched::types::{JobRequest, OptimizationResult, SavingsReport};

/// Immutable application state shared across all request handlers.
///
/// Constructed once after the scheduling run completes and wrapped in
/// `Arc` — no locks needed since all data is read-only.
pub struct AppState {
    /// Region the forecast was generated for.
    pub region: String,
    /// Generated forecast series.
    pub series: Vec<TimePoint>,
    /// Job the recommendation was computed for.
    pub job: JobRequest,
    /// Winning window.
    pub optimal: OptimizationResult,
    /// Savings vs. starting now.
    pub savings: SavingsReport,
    /// First green hour after now, if any.
    pub next_green_hour: Option<usize>,
}

/// Builds the axum router with all API routes.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/forecast", get(handlers::get_forecast))
        .route("/recommendation", get(handlers::get_recommendation))
        .with_state(state)
}

/// Binds to the given address and serves the API.
///
/// # Panics
///
/// Panics if the TCP listener cannot bind to `addr`.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    eprintln!("API server listening on http://{addr}");
    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| panic!("server error: {e}"));
}
