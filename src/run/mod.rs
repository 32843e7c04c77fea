//! Runners: single pass and continuous monitor.

mod monitor;
mod single;

use anyhow::{Context, Result};

use crate::config::{Config, Mode, OutputFormat};
use crate::render::{ConsoleRenderer, ConsoleStyle, JsonLinesRenderer, LogFileSink, RendererSet};

pub use monitor::{run_monitor, Scheduler, SchedulerState};
pub use single::{run_once, RunReport};

/// Builds the renderers selected by `config`: the console view plus the
/// result log unless it is disabled.
///
/// # Errors
///
/// Fails if the result log cannot be opened.
pub fn build_renderers(config: &Config) -> Result<RendererSet> {
    let mut renderers = RendererSet::new();

    match config.output {
        OutputFormat::Text => {
            let style = match config.mode {
                Mode::Once => ConsoleStyle::List,
                Mode::Monitor => ConsoleStyle::Dashboard,
            };
            renderers.push(ConsoleRenderer::stdout(style, config.color));
        }
        OutputFormat::Jsonl => renderers.push(JsonLinesRenderer::stdout()),
    }

    if let Some(path) = &config.log_file {
        let sink = LogFileSink::open(path)
            .with_context(|| format!("Failed to open result log {}", path.display()))?;
        renderers.push(sink);
    }

    Ok(renderers)
}
