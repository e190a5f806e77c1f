//! HTTP API: pass-through proxy to the assistant backend

mod handlers;
mod types;

pub use handlers::create_router;
pub use types::ErrorResponse;

use crate::backend::assistant_url;
use reqwest::Client;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    /// Full upstream endpoint, `<BACKEND_URL>/api/assistant/`
    pub upstream_url: String,
}

impl AppState {
    pub fn new(backend_url: &str) -> Self {
        Self {
            client: Client::new(),
            upstream_url: assistant_url(backend_url),
        }
    }
}
