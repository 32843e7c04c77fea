//! Single pass: probe every endpoint once and report.

use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::Config;
use crate::endpoints::load_endpoints;
use crate::initialization::{init_probe_client, ProbeSettings};
use crate::probe::probe_round;
use crate::render::{render_round, RoundRenderer};

/// Outcome counts of a single pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Endpoints probed (rejected lines excluded)
    pub total: usize,
    /// Endpoints that returned any HTTP response
    pub succeeded: usize,
    /// Endpoints that returned no response
    pub failed: usize,
    /// Lines of the list that were not request URLs
    pub rejected: usize,
    /// Wall time of the probe round in seconds
    pub elapsed_seconds: f64,
}

/// Probes every endpoint in `config.source` once.
///
/// Results go to `renderer` in arrival order, followed by a summary.
///
/// # Errors
///
/// Fails if the endpoint list cannot be read, the HTTP client cannot be
/// built, or the renderer cannot write. Individual probe failures are
/// reported as results and never fail the run.
pub async fn run_once<R: RoundRenderer + ?Sized>(config: &Config, renderer: &mut R) -> Result<RunReport> {
    config.validate()?;

    let endpoints = load_endpoints(&config.source)?;
    for line in &endpoints.rejected {
        renderer.invalid_endpoint(line)?;
    }
    if endpoints.valid.is_empty() {
        warn!("No valid URLs in {}", config.source.display());
    }

    let settings = ProbeSettings::from(config);
    let client = init_probe_client(&settings).context("Failed to initialize HTTP client")?;

    let round = probe_round(&client, &endpoints.valid, settings.channel_limit)
        .await
        .context("Probe round did not complete")?;
    let summary = round.summary(1);

    render_round(renderer, &round, &summary).context("Failed to write results")?;
    renderer.finish().context("Failed to write results")?;

    info!(
        "Checked {} URL{} ({} responded, {} failed) in {:.3}s",
        summary.total,
        if summary.total == 1 { "" } else { "s" },
        summary.succeeded,
        summary.failed,
        summary.elapsed_seconds
    );

    Ok(RunReport {
        total: summary.total,
        succeeded: summary.succeeded,
        failed: summary.failed,
        rejected: endpoints.rejected.len(),
        elapsed_seconds: summary.elapsed_seconds,
    })
}
