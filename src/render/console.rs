//! Console rendering.

use std::io::{self, Stdout, Write};

use colored::*;

use super::{is_good_status, RoundRenderer};
use crate::probe::{ProbeOutcome, ProbeResult, RoundSummary};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";
const HIDE_CURSOR: &str = "\x1B[?25l";
const SHOW_CURSOR: &str = "\x1B[?25h";

/// Layout of console output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStyle {
    /// `URL | CODE | TEXT | TIME` rows followed by a summary line.
    List,
    /// Full-screen view redrawn every round, cursor hidden.
    Dashboard,
}

/// Writes probe results as text.
pub struct ConsoleRenderer<W: Write + Send = Stdout> {
    out: W,
    style: ConsoleStyle,
    color: bool,
    cursor_hidden: bool,
    rounds_seen: u64,
}

impl ConsoleRenderer<Stdout> {
    pub fn stdout(style: ConsoleStyle, color: bool) -> Self {
        Self::new(io::stdout(), style, color)
    }
}

impl<W: Write + Send> ConsoleRenderer<W> {
    pub fn new(out: W, style: ConsoleStyle, color: bool) -> Self {
        Self {
            out,
            style,
            color,
            cursor_hidden: false,
            rounds_seen: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Clears the screen and hides the cursor, once per dashboard session.
    fn start_screen(&mut self) -> io::Result<()> {
        if !self.cursor_hidden {
            write!(self.out, "{CLEAR_SCREEN}{HIDE_CURSOR}")?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    fn paint(&self, text: &str, good: bool) -> String {
        match (self.color, good) {
            (false, _) => text.to_string(),
            (true, true) => text.green().to_string(),
            (true, false) => text.red().to_string(),
        }
    }
}

impl<W: Write + Send> RoundRenderer for ConsoleRenderer<W> {
    fn begin_round(&mut self, _round: u64) -> io::Result<()> {
        if self.style == ConsoleStyle::Dashboard {
            // Invalid lines printed before the first round stay on screen.
            if self.rounds_seen > 0 {
                write!(self.out, "{CLEAR_SCREEN}")?;
            }
            self.start_screen()?;
            self.rounds_seen += 1;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn invalid_endpoint(&mut self, line: &str) -> io::Result<()> {
        if self.style == ConsoleStyle::Dashboard {
            self.start_screen()?;
        }
        let line = self.paint(line, false);
        match self.style {
            ConsoleStyle::List => writeln!(self.out, "{line} is an invalid URL"),
            ConsoleStyle::Dashboard => writeln!(self.out, " {line} is an invalid URL"),
        }
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()> {
        let url = &result.url;
        match (&result.outcome, self.style) {
            (
                ProbeOutcome::Success {
                    status_code,
                    status_text,
                    elapsed_seconds,
                },
                ConsoleStyle::List,
            ) => {
                let code = self.paint(&status_code.to_string(), is_good_status(*status_code));
                writeln!(
                    self.out,
                    "{url} | {code} | {status_text} | {elapsed_seconds:.5} s"
                )
            }
            (
                ProbeOutcome::Failure {
                    message,
                    elapsed_seconds,
                    ..
                },
                ConsoleStyle::List,
            ) => {
                let message = self.paint(message, false);
                writeln!(self.out, "{url} | --- | {message} | {elapsed_seconds:.5} s")
            }
            (
                ProbeOutcome::Success {
                    status_code,
                    status_text,
                    elapsed_seconds,
                },
                ConsoleStyle::Dashboard,
            ) => {
                let code = self.paint(&status_code.to_string(), is_good_status(*status_code));
                writeln!(
                    self.out,
                    " {code}  {status_text}   {elapsed_seconds:.3}s   {url}"
                )
            }
            (ProbeOutcome::Failure { message, .. }, ConsoleStyle::Dashboard) => {
                let dashes = self.paint("---", false);
                let message = self.paint(&format!("{message:<20}"), false);
                writeln!(self.out, " {dashes} {message}  {url}")
            }
        }
    }

    fn end_round(&mut self, summary: &RoundSummary) -> io::Result<()> {
        match self.style {
            ConsoleStyle::List => writeln!(
                self.out,
                "\n{} URL{} checked ({} responded, {} failed), total time taken: {:.3} s",
                summary.total,
                if summary.total == 1 { "" } else { "s" },
                summary.succeeded,
                summary.failed,
                summary.elapsed_seconds
            )?,
            ConsoleStyle::Dashboard => writeln!(
                self.out,
                "\n round {}: {}/{} responded in {:.3}s",
                summary.round, summary.succeeded, summary.total, summary.elapsed_seconds
            )?,
        }
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            write!(self.out, "{SHOW_CURSOR}")?;
            self.cursor_hidden = false;
        }
        self.out.flush()
    }
}
