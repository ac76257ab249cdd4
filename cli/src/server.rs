//! HTTP endpoint for the submission function.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use submit_begehung::{handle_bytes, FunctionConfig, FunctionResponse, GitHubIssues, HandlerError};
use tracing::{info, warn};

/// Path of the function endpoint.
pub const FUNCTION_PATH: &str = "/submit-begehung";
/// Netlify-style path, kept so existing form clients work unchanged.
pub const NETLIFY_FUNCTION_PATH: &str = "/.netlify/functions/submit-begehung";

/// Shared state of the HTTP server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<FunctionConfig>,
    issues: GitHubIssues,
}

impl AppState {
    pub fn new(config: FunctionConfig, issues: GitHubIssues) -> Self {
        Self {
            config: Arc::new(config),
            issues,
        }
    }
}

/// Builds the router serving the function.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(FUNCTION_PATH, post(submit_begehung))
        .route(NETLIFY_FUNCTION_PATH, post(submit_begehung))
        .with_state(state)
}

/// Bodies that cannot be buffered (e.g. over the default size limit) are
/// answered with the function's JSON failure rather than axum's plain-text
/// rejection.
async fn submit_begehung(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> (StatusCode, Json<Value>) {
    let response = match body {
        Ok(body) => handle_bytes(&body, &state.config, &state.issues).await,
        Err(rejection) => {
            let error = HandlerError::UnreadableBody(rejection.body_text());
            warn!(error = %error, "Rejected request body");
            FunctionResponse::from(&error)
        }
    };
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(response.body()))
}

/// Serves the function until Ctrl-C.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, path = FUNCTION_PATH, "Listening for submissions");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down");
        })
        .await
}
