//! Client configuration resolved from the environment.

use anyhow::Result;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    /// Load configuration, falling back to the local development backend.
    pub fn load() -> Result<Self> {
        let api_base_url =
            std::env::var("JOBBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        info!("Backend API: {}", api_base_url);

        Ok(Self { api_base_url })
    }
}
