//! Client configuration
//!
//! The base URL is resolved on every call: an explicit
//! [`ClientConfig::base_url`] wins, then the process-wide slot set by
//! [`set_default_base_url`], then [`DEFAULT_BASE_URL`]. Reading it at call
//! time lets tests point the client at a mock server per test case.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// Root URL of the Qonto v2 API
pub const DEFAULT_BASE_URL: &str = "https://thirdparty.qonto.eu/v2";

/// Environment variable overriding the base URL (used by the CLI)
pub const BASE_URL_ENV: &str = "QONTO_BASE_URL";

/// Process-wide base URL override. Set once before concurrent use.
static BASE_URL_OVERRIDE: RwLock<Option<String>> = RwLock::new(None);

/// Override the base URL for every client without an explicit one
pub fn set_default_base_url(url: impl Into<String>) {
    *BASE_URL_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = Some(url.into());
}

/// Drop the process-wide override, going back to [`DEFAULT_BASE_URL`]
pub fn reset_default_base_url() {
    *BASE_URL_OVERRIDE
        .write()
        .unwrap_or_else(PoisonError::into_inner) = None;
}

/// The process-wide base URL currently in effect
pub fn default_base_url() -> String {
    BASE_URL_OVERRIDE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for all requests; `None` defers to [`default_base_url`]
    pub base_url: Option<String>,
    /// Timeout applied to every request; `None` means no deadline
    pub timeout: Option<Duration>,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: None,
            default_headers: HashMap::new(),
            user_agent: format!("qonto-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL to use for a call made right now
    pub fn resolved_base_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(default_base_url)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
