//! HTTP client initialization.
//!
//! Probes must not share connections: every probe measures a cold request,
//! so pooling is disabled and each request asks the server to close.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONNECTION};
use reqwest::ClientBuilder;

use crate::config::{Config, DEFAULT_CHANNEL_LIMIT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;

/// Settings for one probe round, independent of how they were configured.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    /// Per-request timeout; also the idle-connection timeout.
    pub timeout: Duration,
    /// Capacity of the result channel.
    pub channel_limit: usize,
    /// HTTP User-Agent header value.
    pub user_agent: String,
}

impl ProbeSettings {
    /// Settings with the given timeout and defaults for everything else.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            channel_limit: DEFAULT_CHANNEL_LIMIT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<&Config> for ProbeSettings {
    fn from(config: &Config) -> Self {
        Self {
            timeout: config.timeout,
            channel_limit: config.channel_limit,
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Initializes the HTTP client used by every probe worker.
///
/// Creates a `reqwest::Client` configured with:
/// - Request timeout and idle-connection timeout both set to `settings.timeout`
/// - No idle connections kept per host (no pooling across probes or rounds)
/// - `Connection: close` on every request
/// - User-Agent header from settings
/// - Default redirect policy
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_probe_client(settings: &ProbeSettings) -> Result<reqwest::Client, InitializationError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("close"));

    let client = ClientBuilder::new()
        .timeout(settings.timeout)
        .pool_idle_timeout(settings.timeout)
        .pool_max_idle_per_host(0)
        .default_headers(headers)
        .user_agent(settings.user_agent.clone())
        .build()?;
    Ok(client)
}
