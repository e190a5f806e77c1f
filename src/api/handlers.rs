//! HTTP request handlers

use super::types::ErrorResponse;
use super::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::de::IgnoredAny;
use thiserror::Error;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Assistant forwarding, with or without the trailing slash
        .route("/api/assistant", post(forward_assistant))
        .route("/api/assistant/", post(forward_assistant))
        // Version
        .route("/version", get(get_version))
        .with_state(state)
}

// ============================================================
// Assistant Forwarding
// ============================================================

/// Forward the JSON body verbatim and mirror the upstream status and body
///
/// Both bodies must parse as JSON, but the bytes passed on are the ones
/// received, so key order and number formatting survive the hop.
async fn forward_assistant(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ProxyError> {
    serde_json::from_slice::<IgnoredAny>(&body).map_err(ProxyError::InvalidBody)?;

    let response = state
        .client
        .post(&state.upstream_url)
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .map_err(ProxyError::Upstream)?;

    let status = response.status();
    let data = response.bytes().await.map_err(ProxyError::Upstream)?;
    serde_json::from_slice::<IgnoredAny>(&data).map_err(ProxyError::InvalidUpstreamBody)?;

    tracing::info!(
        upstream = %state.upstream_url,
        status = status.as_u16(),
        "Forwarded assistant request"
    );

    Ok((status, [(header::CONTENT_TYPE, "application/json")], data).into_response())
}

async fn get_version() -> &'static str {
    concat!("assistant-relay ", env!("CARGO_PKG_VERSION"))
}

// ============================================================
// Error Handling
// ============================================================

const GENERIC_PROXY_ERROR: &str = "Proxy error";

#[derive(Debug, Error)]
enum ProxyError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[source] serde_json::Error),
    #[error("{0}")]
    Upstream(#[source] reqwest::Error),
    #[error("invalid upstream body: {0}")]
    InvalidUpstreamBody(#[source] serde_json::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Assistant proxy failed");

        let message = self.to_string();
        let message = if message.is_empty() {
            GENERIC_PROXY_ERROR.to_string()
        } else {
            message
        };

        let body = Json(ErrorResponse::new(message));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
