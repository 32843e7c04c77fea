//! Configuration constants.
//!
//! Defaults for the CLI and the probing engine.

/// Default endpoint-list file, one URL per line.
pub const DEFAULT_SOURCE: &str = "urls.txt";

/// Default append-only result log.
pub const DEFAULT_LOG_FILE: &str = "url_response.log";

/// Seconds slept between rounds in monitor mode.
pub const DEFAULT_INTERVAL_SECS: u64 = 30;

/// Per-request timeout for a single pass.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Per-request timeout in monitor mode.
///
/// Shorter than the single-pass default so a round of slow endpoints stays
/// well inside the polling interval.
pub const DEFAULT_MONITOR_TIMEOUT_SECS: u64 = 6;

/// Result channel buffer capacity.
///
/// This bounds how many finished probes may wait for the collector, not how
/// many probes run at once. 100 is comfortable for lists of ~1000 URLs.
pub const DEFAULT_CHANNEL_LIMIT: usize = 100;

/// Default User-Agent header value.
pub const DEFAULT_USER_AGENT: &str = concat!("url_response/", env!("CARGO_PKG_VERSION"));

/// HTTP status codes rendered as "good" in monitor output.
///
/// Everything else, including other 2xx codes, is shown as bad.
pub const GOOD_STATUS_CODES: &[u16] = &[200, 203, 206, 300, 301, 302, 303, 304, 307, 308];
