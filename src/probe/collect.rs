//! Round collector: drain exactly one round from the result channel.

use std::time::Instant;

use tokio::sync::mpsc;

use super::models::{ProbeResult, Round};
use crate::error_handling::RoundError;

/// Receives exactly `expected` results, in arrival order.
///
/// Never reads past `expected`, so results belonging to anything sent later
/// stay in the channel.
///
/// # Errors
///
/// Returns `RoundError::ChannelClosed` if every sender is gone before
/// `expected` results have arrived.
pub async fn collect_round(
    results: &mut mpsc::Receiver<ProbeResult>,
    expected: usize,
) -> Result<Round, RoundError> {
    let start = Instant::now();
    let mut collected = Vec::with_capacity(expected);

    while collected.len() < expected {
        match results.recv().await {
            Some(result) => collected.push(result),
            None => {
                return Err(RoundError::ChannelClosed {
                    expected,
                    received: collected.len(),
                })
            }
        }
    }

    Ok(Round::new(collected, start.elapsed()))
}
