//! Result rendering.
//!
//! The probing engine never writes to the terminal or to files itself. The
//! runners hand each collected round to a [`RoundRenderer`], which can be a
//! console view, a JSON-lines stream, the append-only result log, or several
//! of these through [`RendererSet`].

mod console;
mod jsonl;
mod log_file;

use std::io;

use crate::config::GOOD_STATUS_CODES;
use crate::probe::{ProbeResult, Round, RoundSummary};

// Re-export public API
pub use console::{ConsoleRenderer, ConsoleStyle};
pub use jsonl::JsonLinesRenderer;
pub use log_file::LogFileSink;

/// Receives the output of the probing engine.
///
/// Calls for one round arrive in this order: `begin_round`, one
/// `render_result` per probe (arrival order), `end_round`. `finish` is
/// called once when the run ends, including on Ctrl-C in monitor mode.
pub trait RoundRenderer: Send {
    fn begin_round(&mut self, _round: u64) -> io::Result<()> {
        Ok(())
    }

    /// A line from the endpoint list that is not a request URL.
    fn invalid_endpoint(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()>;

    fn end_round(&mut self, _summary: &RoundSummary) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: RoundRenderer + ?Sized> RoundRenderer for Box<R> {
    fn begin_round(&mut self, round: u64) -> io::Result<()> {
        (**self).begin_round(round)
    }

    fn invalid_endpoint(&mut self, line: &str) -> io::Result<()> {
        (**self).invalid_endpoint(line)
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()> {
        (**self).render_result(result)
    }

    fn end_round(&mut self, summary: &RoundSummary) -> io::Result<()> {
        (**self).end_round(summary)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

/// Fans every call out to each renderer in insertion order.
#[derive(Default)]
pub struct RendererSet {
    renderers: Vec<Box<dyn RoundRenderer>>,
}

impl RendererSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, renderer: impl RoundRenderer + 'static) {
        self.renderers.push(Box::new(renderer));
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl RoundRenderer for RendererSet {
    fn begin_round(&mut self, round: u64) -> io::Result<()> {
        self.renderers.iter_mut().try_for_each(|r| r.begin_round(round))
    }

    fn invalid_endpoint(&mut self, line: &str) -> io::Result<()> {
        self.renderers
            .iter_mut()
            .try_for_each(|r| r.invalid_endpoint(line))
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()> {
        self.renderers
            .iter_mut()
            .try_for_each(|r| r.render_result(result))
    }

    fn end_round(&mut self, summary: &RoundSummary) -> io::Result<()> {
        self.renderers
            .iter_mut()
            .try_for_each(|r| r.end_round(summary))
    }

    fn finish(&mut self) -> io::Result<()> {
        self.renderers.iter_mut().try_for_each(|r| r.finish())
    }
}

/// Renders one collected round from start to end.
pub fn render_round<R: RoundRenderer + ?Sized>(
    renderer: &mut R,
    round: &Round,
    summary: &RoundSummary,
) -> io::Result<()> {
    renderer.begin_round(summary.round)?;
    for result in round {
        renderer.render_result(result)?;
    }
    renderer.end_round(summary)
}

/// Whether a status code is shown as healthy.
pub fn is_good_status(status_code: u16) -> bool {
    GOOD_STATUS_CODES.contains(&status_code)
}
