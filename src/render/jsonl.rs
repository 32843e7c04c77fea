//! JSON-lines rendering: one object per line, for piping into other tools.

use std::io::{self, Stdout, Write};

use serde_json::json;

use super::RoundRenderer;
use crate::probe::{ProbeResult, RoundSummary};

pub struct JsonLinesRenderer<W: Write + Send = Stdout> {
    out: W,
}

impl JsonLinesRenderer<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line(&mut self, value: &impl serde::Serialize) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")
    }
}

impl<W: Write + Send> RoundRenderer for JsonLinesRenderer<W> {
    fn invalid_endpoint(&mut self, line: &str) -> io::Result<()> {
        self.write_line(&json!({ "url": line, "outcome": "invalid" }))
    }

    fn render_result(&mut self, result: &ProbeResult) -> io::Result<()> {
        self.write_line(result)
    }

    fn end_round(&mut self, summary: &RoundSummary) -> io::Result<()> {
        self.write_line(&json!({ "summary": summary }))?;
        self.out.flush()
    }
}
