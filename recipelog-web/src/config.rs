//! Frontend configuration module
//!
//! This module provides the API location the client talks to. The value is
//! fixed at build time so the bundle needs no runtime configuration fetch.

/// Base URL used when `RECIPELOG_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001/api";

/// Frontend configuration for the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Root of the REST API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::with_base_url(option_env!("RECIPELOG_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration pointing at an explicit API root.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the API base URL
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}
