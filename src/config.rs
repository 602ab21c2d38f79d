//! API endpoint configuration.
//!
//! The base URL is resolved once at startup and threaded through the client
//! constructors; nothing else reads the environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API address for local development.
const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Remote API configuration, built once in `main` and handed to every
/// network client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build the config from the compile-time `ERP_API_URL` override,
    /// falling back to the local development address.
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("ERP_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_owned(),
        }
    }

    /// Config pointing at an explicit base URL. Trailing slashes are
    /// stripped so endpoint joining never doubles them.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
