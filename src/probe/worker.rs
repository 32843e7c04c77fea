//! Probe worker: one GET against one endpoint.

use std::time::Instant;

use log::{debug, trace};

use super::models::ProbeResult;
use crate::error_handling::{classify_transport_error, describe_reqwest_error};

/// Probes `url` once and returns its result.
///
/// Never fails: transport errors are classified into a `Failure` result.
/// The elapsed time stops when response headers arrive (or the error is
/// observed); the body is then drained so the connection can close cleanly.
/// A body that fails to drain does not turn a response into a failure.
pub async fn probe_endpoint(client: &reqwest::Client, url: &str) -> ProbeResult {
    let start = Instant::now();

    match client.get(url).send().await {
        Ok(mut response) => {
            let elapsed = start.elapsed();
            let status = response.status();

            // Discard the body chunk by chunk so it is never held in memory.
            loop {
                match response.chunk().await {
                    Ok(Some(_)) => continue,
                    Ok(None) => break,
                    Err(e) => {
                        debug!("Failed to drain response body for {url}: {e}");
                        break;
                    }
                }
            }

            trace!(
                "{url} responded {} in {:.3}s",
                status.as_u16(),
                elapsed.as_secs_f64()
            );
            ProbeResult::success(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                elapsed,
            )
        }
        Err(e) => {
            let elapsed = start.elapsed();
            let raw = describe_reqwest_error(e);
            let classification = classify_transport_error(&raw);
            debug!(
                "{url} failed after {:.3}s ({}): {raw}",
                elapsed.as_secs_f64(),
                classification.category
            );
            ProbeResult::failure(url, classification, elapsed)
        }
    }
}
