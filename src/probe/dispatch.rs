//! Probe dispatcher: fan out one worker per endpoint.

use log::warn;
use tokio::sync::mpsc;

use super::models::ProbeResult;
use super::worker::probe_endpoint;

/// Spawns one probe task per endpoint and returns the shared result channel.
///
/// Returns immediately. All probes start at once: `channel_limit` only
/// bounds how many finished results may wait for the collector before a
/// worker blocks on send, not how many probes are in flight. Each worker
/// sends exactly one result.
///
/// Must be called from within a Tokio runtime.
pub fn dispatch(
    client: &reqwest::Client,
    endpoints: &[String],
    channel_limit: usize,
) -> mpsc::Receiver<ProbeResult> {
    let (tx, rx) = mpsc::channel(channel_limit.max(1));

    for url in endpoints {
        let tx = tx.clone();
        let client = client.clone();
        let url = url.clone();

        tokio::spawn(async move {
            let result = probe_endpoint(&client, &url).await;
            if tx.send(result).await.is_err() {
                warn!("Result for {url} dropped: round collector is gone");
            }
        });
    }

    // Workers hold the only senders from here on, so the channel closes
    // once the last one has reported.
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initialization::{init_probe_client, ProbeSettings};
    use httptest::{matchers::*, responders::*, Expectation, Server};
    use std::time::Duration;

    #[tokio::test]
    async fn test_dispatch_sends_one_result_per_endpoint() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method("GET"))
                .times(4)
                .respond_with(status_code(200)),
        );
        let endpoints: Vec<String> = (0..4)
            .map(|i| server.url(&format!("/{}", i)).to_string())
            .collect();
        let client = init_probe_client(&ProbeSettings::with_timeout(Duration::from_secs(5))).unwrap();

        let mut rx = dispatch(&client, &endpoints, 100);

        let mut seen = Vec::new();
        while let Some(result) = rx.recv().await {
            seen.push(result.url);
        }
        seen.sort();
        let mut expected = endpoints.clone();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[tokio::test]
    async fn test_small_buffer_does_not_limit_fan_out() {
        // With a buffer of 1 all probes still start together: total time
        // stays near one delay rather than the sum of all delays.
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method("GET"))
                .times(5)
                .respond_with(delay_and_then(
                    Duration::from_millis(500),
                    status_code(200),
                )),
        );
        let endpoints: Vec<String> = (0..5)
            .map(|i| server.url(&format!("/slow/{}", i)).to_string())
            .collect();
        let client = init_probe_client(&ProbeSettings::with_timeout(Duration::from_secs(10))).unwrap();

        let start = std::time::Instant::now();
        let mut rx = dispatch(&client, &endpoints, 1);
        let mut count = 0;
        while rx.recv().await.is_some() {
            count += 1;
        }

        assert_eq!(count, 5);
        assert!(start.elapsed() < Duration::from_millis(2000));
    }

    #[tokio::test]
    async fn test_empty_endpoint_list_closes_channel() {
        let client = init_probe_client(&ProbeSettings::default()).unwrap();
        let mut rx = dispatch(&client, &[], 10);
        assert!(rx.recv().await.is_none());
    }
}
