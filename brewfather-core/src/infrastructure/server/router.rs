use super::error::ServerError;
use super::state::ServerState;
use crate::application::handler::McpHandler;
use crate::infrastructure::api::ApiTransport;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

/// `POST /mcp` for JSON-RPC, `GET /health` for liveness.
pub fn build_router<T>(handler: Arc<McpHandler<T>>) -> Router
where
    T: ApiTransport + 'static,
{
    let state = Arc::new(ServerState::new(handler));
    Router::new()
        .route("/mcp", post(handle_mcp::<T>))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub(super) async fn serve<T>(handler: Arc<McpHandler<T>>, addr: SocketAddr) -> Result<(), ServerError>
where
    T: ApiTransport + 'static,
{
    info!(%addr, "Binding MCP HTTP server");
    let app = build_router(handler);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "MCP HTTP server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

async fn handle_mcp<T: ApiTransport + 'static>(
    State(state): State<Arc<ServerState<T>>>,
    body: String,
) -> Response {
    match state.handler().handle_message(&body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
