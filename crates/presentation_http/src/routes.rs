//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Voice artifact delivery
        .route("/audio/{artifact_id}", get(handlers::audio::serve_audio))
        // Observation intake (v1)
        .route("/v1/alerts/{node}", post(handlers::alerts::dispatch_alert))
        // Twilio inbound webhook (language selection)
        .route("/webhook/twilio", post(handlers::webhook::receive_message))
        // Attach state
        .with_state(state)
}
