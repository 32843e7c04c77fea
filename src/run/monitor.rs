//! Continuous monitor: repeat rounds forever on a fixed interval.

use std::convert::Infallible;
use std::future::Future;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::Config;
use crate::endpoints::load_endpoints;
use crate::initialization::{init_probe_client, ProbeSettings};
use crate::probe::{probe_round, RoundSummary};
use crate::render::{render_round, RoundRenderer};

/// Where the scheduler is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Between rounds (or before the first one).
    Idle,
    /// Probes dispatched, results being collected or rendered.
    Polling,
}

/// Drives dispatch → collect → render, then sleeps `interval`.
///
/// The sleep starts when rendering of a round has finished, so one cycle
/// takes probe time plus the interval; rounds never overlap.
pub struct Scheduler<R: RoundRenderer> {
    client: reqwest::Client,
    endpoints: Vec<String>,
    channel_limit: usize,
    interval: Duration,
    renderer: R,
    state: SchedulerState,
    rounds_completed: u64,
}

impl<R: RoundRenderer> Scheduler<R> {
    pub fn new(
        client: reqwest::Client,
        endpoints: Vec<String>,
        channel_limit: usize,
        interval: Duration,
        renderer: R,
    ) -> Self {
        Self {
            client,
            endpoints,
            channel_limit,
            interval,
            renderer,
            state: SchedulerState::Idle,
            rounds_completed: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn rounds_completed(&self) -> u64 {
        self.rounds_completed
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Runs one full round: Idle → Polling → Idle.
    ///
    /// # Errors
    ///
    /// Fails if the renderer cannot write or a worker dies without reporting.
    pub async fn poll_once(&mut self) -> Result<RoundSummary> {
        self.state = SchedulerState::Polling;
        let outcome = self.poll_round().await;
        self.state = SchedulerState::Idle;
        outcome
    }

    async fn poll_round(&mut self) -> Result<RoundSummary> {
        let number = self.rounds_completed + 1;
        let round = probe_round(&self.client, &self.endpoints, self.channel_limit)
            .await
            .with_context(|| format!("Round {number} did not complete"))?;
        let summary = round.summary(number);

        render_round(&mut self.renderer, &round, &summary).context("Failed to write results")?;
        self.rounds_completed = number;

        info!(
            "Round {}: {}/{} responded in {:.3}s",
            summary.round, summary.succeeded, summary.total, summary.elapsed_seconds
        );
        Ok(summary)
    }

    /// Polls forever, starting immediately.
    ///
    /// Only returns if a round fails; the `Ok` type is uninhabited.
    pub async fn run(&mut self) -> Result<Infallible> {
        loop {
            self.poll_once().await?;
            debug!("Sleeping {:?} before next round", self.interval);
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Monitors every endpoint in `config.source` until `shutdown` resolves.
///
/// The endpoint list is read once. When `shutdown` resolves the current
/// round is abandoned. The renderer's `finish` runs whenever monitoring
/// stops, which restores the cursor hidden by the dashboard view.
///
/// # Errors
///
/// Fails if the endpoint list cannot be read, the HTTP client cannot be
/// built, or the renderer cannot write.
pub async fn run_monitor<R, F>(config: &Config, renderer: R, shutdown: F) -> Result<R>
where
    R: RoundRenderer,
    F: Future<Output = ()>,
{
    config.validate()?;

    let endpoints = load_endpoints(&config.source)?;
    let mut renderer = renderer;
    for line in &endpoints.rejected {
        renderer.invalid_endpoint(line)?;
    }
    if endpoints.valid.is_empty() {
        warn!("No valid URLs in {}", config.source.display());
    }

    let settings = ProbeSettings::from(config);
    let client = init_probe_client(&settings).context("Failed to initialize HTTP client")?;
    let mut scheduler = Scheduler::new(
        client,
        endpoints.valid,
        settings.channel_limit,
        config.interval,
        renderer,
    );

    info!(
        "Monitoring every {}s with a {}s request timeout",
        config.interval.as_secs(),
        settings.timeout.as_secs()
    );

    let outcome: Result<()> = tokio::select! {
        result = scheduler.run() => result.map(|never| match never {}),
        _ = shutdown => {
            info!(
                "Stopping after {} round{}",
                scheduler.rounds_completed(),
                if scheduler.rounds_completed() == 1 { "" } else { "s" }
            );
            Ok(())
        }
    };

    // Restore the terminal on both paths before reporting a failed round.
    let finished = scheduler
        .renderer_mut()
        .finish()
        .context("Failed to restore terminal");
    outcome?;
    finished?;
    Ok(scheduler.into_renderer())
}
