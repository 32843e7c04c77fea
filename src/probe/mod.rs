//! Concurrent probing engine.
//!
//! One round is: dispatch one worker per endpoint, then collect exactly as
//! many results as there are endpoints from the shared channel.
//!
//! ```text
//! endpoints ─► dispatch ─► N workers ─► mpsc channel ─► collect_round ─► Round
//! ```

mod collect;
mod dispatch;
mod models;
mod worker;

use log::debug;

use crate::error_handling::RoundError;

// Re-export public API
pub use collect::collect_round;
pub use dispatch::dispatch;
pub use models::{ProbeOutcome, ProbeResult, Round, RoundSummary};
pub use worker::probe_endpoint;

/// Probes every endpoint once and returns the complete round.
///
/// # Errors
///
/// Returns `RoundError` only if a worker dies without reporting; transport
/// failures are results, not errors.
pub async fn probe_round(
    client: &reqwest::Client,
    endpoints: &[String],
    channel_limit: usize,
) -> Result<Round, RoundError> {
    debug!(
        "Dispatching {} probes (channel limit {})",
        endpoints.len(),
        channel_limit
    );
    let mut results = dispatch(client, endpoints, channel_limit);
    collect_round(&mut results, endpoints.len()).await
}
