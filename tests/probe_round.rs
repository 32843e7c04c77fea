//! Integration tests for one probe round against local endpoints.
//!
//! Mock servers and local listeners stand in for real sites, so these run
//! without network access. Tests that need DNS and the Internet are marked
//! `#[ignore]`; run them with `cargo test -- --ignored`.

mod helpers;

use std::collections::HashMap;
use std::time::Duration;

use httptest::{matchers::*, responders::*, Expectation, Server};
use url_response::{probe_round, FailureCategory, ProbeOutcome};

use helpers::{refused_url, silent_server, test_client};

#[tokio::test]
async fn test_round_mixes_success_and_failure() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ok"))
            .respond_with(status_code(200).body("fine")),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .respond_with(status_code(404)),
    );
    let ok = server.url("/ok").to_string();
    let gone = server.url("/gone").to_string();
    let refused = refused_url();
    let endpoints = vec![ok.clone(), gone.clone(), refused.clone()];

    let round = probe_round(&test_client(Duration::from_secs(5)), &endpoints, 100)
        .await
        .expect("round should complete");

    assert_eq!(round.len(), 3);
    assert_eq!(round.succeeded(), 2);
    assert_eq!(round.failed(), 1);

    let by_url: HashMap<&str, &ProbeOutcome> =
        round.iter().map(|r| (r.url.as_str(), &r.outcome)).collect();
    assert!(matches!(
        by_url[ok.as_str()],
        ProbeOutcome::Success { status_code: 200, .. }
    ));
    assert!(matches!(
        by_url[gone.as_str()],
        ProbeOutcome::Success { status_code: 404, .. }
    ));
    assert!(matches!(
        by_url[refused.as_str()],
        ProbeOutcome::Failure {
            category: FailureCategory::ConnectionRefused,
            ..
        }
    ));

    for result in &round {
        let elapsed = result.elapsed_seconds();
        assert!(elapsed >= 0.0 && elapsed.is_finite());
    }
}

#[tokio::test]
async fn test_results_arrive_in_completion_order() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/slow"))
            .respond_with(delay_and_then(Duration::from_millis(600), status_code(200))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/fast"))
            .respond_with(status_code(200)),
    );
    let slow = server.url("/slow").to_string();
    let fast = server.url("/fast").to_string();

    let round = probe_round(
        &test_client(Duration::from_secs(5)),
        &[slow.clone(), fast.clone()],
        100,
    )
    .await
    .unwrap();

    let urls: Vec<&str> = round.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec![fast.as_str(), slow.as_str()]);
}

#[tokio::test]
async fn test_many_endpoints_with_tiny_buffer() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method("GET"))
            .times(25)
            .respond_with(status_code(200)),
    );
    let endpoints: Vec<String> = (0..25)
        .map(|i| server.url(&format!("/item/{}", i)).to_string())
        .collect();

    let round = probe_round(&test_client(Duration::from_secs(5)), &endpoints, 2)
        .await
        .unwrap();

    assert_eq!(round.len(), 25);
    assert_eq!(round.succeeded(), 25);
}

#[tokio::test]
async fn test_one_slow_endpoint_does_not_sink_the_round() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200)),
    );
    let silent = format!("http://{}/", silent_server().await);
    let endpoints = vec![server.url("/").to_string(), silent.clone()];

    let round = probe_round(&test_client(Duration::from_secs(1)), &endpoints, 100)
        .await
        .unwrap();

    assert_eq!(round.len(), 2);
    let timed_out = round.iter().find(|r| r.url == silent).unwrap();
    assert_eq!(timed_out.category(), Some(FailureCategory::Unreachable));
}

#[tokio::test]
async fn test_failure_category_is_stable_across_rounds() {
    let client = test_client(Duration::from_secs(5));
    let endpoints = vec![refused_url()];

    let first = probe_round(&client, &endpoints, 10).await.unwrap();
    let second = probe_round(&client, &endpoints, 10).await.unwrap();

    assert_eq!(first.results()[0].category(), second.results()[0].category());
    assert_eq!(
        first.results()[0].category(),
        Some(FailureCategory::ConnectionRefused)
    );
}

#[tokio::test]
async fn test_empty_list_gives_empty_round() {
    let round = probe_round(&test_client(Duration::from_secs(1)), &[], 10)
        .await
        .unwrap();
    assert!(round.is_empty());
}

#[tokio::test]
#[ignore] // Requires DNS and Internet access
async fn test_public_endpoints_scenario() {
    let endpoints = vec![
        "https://example.com".to_string(),
        "https://nonexistent.invalid".to_string(),
        "https://127.0.0.1:1".to_string(),
    ];

    let round = probe_round(&test_client(Duration::from_secs(10)), &endpoints, 100)
        .await
        .unwrap();

    assert_eq!(round.len(), 3);
    let category = |url: &str| round.iter().find(|r| r.url == url).unwrap().category();
    assert_eq!(category("https://example.com"), None);
    assert_eq!(
        category("https://nonexistent.invalid"),
        Some(FailureCategory::NoHost)
    );
    assert_eq!(
        category("https://127.0.0.1:1"),
        Some(FailureCategory::ConnectionRefused)
    );
}
