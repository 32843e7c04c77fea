//! url_response library: concurrent HTTP endpoint probing.
//!
//! Probes a list of HTTP(S) endpoints concurrently, records each endpoint's
//! status code and latency, and classifies transport failures into a small
//! taxonomy (`NoHost`, `Unreachable`, `ConnectionRefused`, `Other`). Results
//! are reported once, or round after round on a fixed interval.
//!
//! # Example
//!
//! ```no_run
//! use url_response::{init_probe_client, probe_round, ProbeSettings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ProbeSettings::default();
//! let client = init_probe_client(&settings)?;
//! let endpoints = vec![
//!     "https://example.com".to_string(),
//!     "https://nonexistent.invalid".to_string(),
//! ];
//!
//! let round = probe_round(&client, &endpoints, settings.channel_limit).await?;
//! for result in &round {
//!     println!("{:?}", result);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Dispatching probes spawns Tokio tasks, so it must run inside a Tokio
//! runtime.

pub mod config;
pub mod endpoints;
mod error_handling;
pub mod initialization;
pub mod probe;
pub mod render;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Mode, Opt, OutputFormat};
pub use endpoints::{is_request_url, load_endpoints, parse_endpoints, EndpointList};
pub use error_handling::{
    classify_transport_error, describe_reqwest_error, error_chain_text, Classification,
    ConfigError, FailureCategory, InitializationError, RoundError,
};
pub use initialization::{init_logger_with, init_probe_client, ProbeSettings};
pub use probe::{
    collect_round, dispatch, probe_endpoint, probe_round, ProbeOutcome, ProbeResult, Round,
    RoundSummary,
};
pub use render::{
    is_good_status, render_round, ConsoleRenderer, ConsoleStyle, JsonLinesRenderer, LogFileSink,
    RendererSet, RoundRenderer,
};
pub use run::{build_renderers, run_monitor, run_once, RunReport, Scheduler, SchedulerState};
