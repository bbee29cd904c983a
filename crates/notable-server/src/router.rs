//! Router assembly for the Notable HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// CORS is permissive (clients may call from various origins).
/// TraceLayer provides request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Service metadata
        .route("/", get(handlers::info::service_info))
        // HW control
        .route("/hw_status", post(handlers::hardware::set_hw_status))
        // Preparation
        .route("/pipette_info", get(handlers::preparation::get_pipette_info))
        .route("/labware_info", get(handlers::preparation::get_labware_info))
        .route(
            "/preparation_info",
            post(handlers::preparation::set_preparation_info),
        )
        // Step
        .route("/step_info", post(handlers::step::set_step_info))
        .route("/step_available", post(handlers::step::get_step_available))
        .route(
            "/step_estimation_time",
            post(handlers::step::get_step_estimation_time),
        )
        // Run
        .route("/run_status", post(handlers::run::set_run_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
