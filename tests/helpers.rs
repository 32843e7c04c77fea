// Shared test helpers for local endpoints that fail in known ways.

use std::net::SocketAddr;
use std::time::Duration;

use url_response::{init_probe_client, ProbeSettings};

/// URL of a local port with nothing listening on it.
#[allow(dead_code)] // Used by other test files
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{}/", addr)
}

/// Starts a listener that accepts connections and never answers.
#[allow(dead_code)] // Used by other test files
pub async fn silent_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}

/// Probe client with the given timeout.
#[allow(dead_code)] // Used by other test files
pub fn test_client(timeout: Duration) -> reqwest::Client {
    init_probe_client(&ProbeSettings::with_timeout(timeout)).expect("Failed to build client")
}
