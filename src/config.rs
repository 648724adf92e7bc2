use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "https://muziverse-backend.onrender.com";

/// Base URL of the search backend, fixed at build time.
///
/// Override with `MUZIVERSE_BACKEND_URL` in the build environment.
pub fn default_backend_url() -> &'static str {
    option_env!("MUZIVERSE_BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
}

impl AppConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new(default_backend_url())
    }
}
