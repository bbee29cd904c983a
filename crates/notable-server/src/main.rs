//! Binary entrypoint for the Notable HTTP server.
//!
//! Reads configuration from environment variables:
//! - `NOTABLE_PORT`: Server listen port (default: "8000")

use notable_server::router::build_router;
use notable_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("NOTABLE_PORT").unwrap_or_else(|_| "8000".to_string());

    let state = AppState::new();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("notable server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
