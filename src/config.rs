//! Runtime configuration loaded from the environment

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_PROXY_PORT: u16 = 3000;

/// Configuration shared by the proxy and the chat client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Upstream the proxy forwards to
    pub backend_url: String,
    /// Base URL the chat client sends requests to
    pub assistant_url: String,
    /// Port the proxy listens on
    pub proxy_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            assistant_url: DEFAULT_BACKEND_URL.to_string(),
            proxy_port: DEFAULT_PROXY_PORT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            backend_url: var("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            assistant_url: var("ASSISTANT_URL")
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            proxy_port: var("ASSISTANT_PROXY_PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PROXY_PORT),
        }
    }
}
