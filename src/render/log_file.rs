//! Append-only result log.
//!
//! One line per probe result, prefixed with a local timestamp:
//!
//! ```text
//! 2019/05/01 10:15:42 | https://example.com | 200 | OK | 0.21532 s
//! 2019/05/01 10:15:42 | http://127.0.0.1:1 | --- | connection_refused: connection refused | 0.00041 s
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::info;

use super::RoundRenderer;
use crate::probe::{ProbeOutcome, ProbeResult, RoundSummary};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

pub struct LogFileSink<W: Write + Send = File> {
    out: W,
}

impl LogFileSink<File> {
    /// Opens `path` for appending, creating it if needed, and writes a
    /// `start` marker.
    pub fn open(path: &Path) -> io::Result<Self> {
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o640);
        }
        let file = options.open(path)?;
        info!("Appending results to {}", path.display());
        Self::from_writer(file)
    }
}

impl<W: Write + Send> LogFileSink<W> {
    pub fn from_writer(out: W) -> io::Result<Self> {
        let mut sink = Self { out };
        sink.write_line("start")?;
        Ok(sink)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "{} | {}",
            chrono::Local::now().format(TIMESTAMP_FORMAT),
            line
        )
    }
}

impl<W: Write + Send> RoundRenderer for LogFileSink<W> {
    fn invalid_endpoint(&mut self, line: &str) -> io::Result<()> {
        self.write_line(&format!("{line} | invalid URL"))
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()> {
        let line = match &result.outcome {
            ProbeOutcome::Success {
                status_code,
                status_text,
                elapsed_seconds,
            } => format!(
                "{} | {} | {} | {:.5} s",
                result.url, status_code, status_text, elapsed_seconds
            ),
            ProbeOutcome::Failure {
                category,
                message,
                elapsed_seconds,
            } => format!(
                "{} | --- | {}: {} | {:.5} s",
                result.url, category, message, elapsed_seconds
            ),
        };
        self.write_line(&line)
    }

    fn end_round(&mut self, _summary: &RoundSummary) -> io::Result<()> {
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
