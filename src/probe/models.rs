//! Probe result data model.

use std::time::Duration;

use serde::Serialize;

use crate::error_handling::{Classification, FailureCategory};

/// Outcome of one probe.
///
/// Any HTTP response is a `Success`, whatever its status code. `Failure`
/// means no response was received at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Success {
        /// Raw HTTP status code, not normalized.
        status_code: u16,
        /// Canonical reason phrase, empty for unknown codes.
        status_text: String,
        /// Seconds from request start until response headers arrived.
        elapsed_seconds: f64,
    },
    Failure {
        category: FailureCategory,
        message: String,
        /// Seconds from request start until the error was observed.
        elapsed_seconds: f64,
    },
}

/// Result of probing one endpoint. Carries its URL because results arrive
/// in completion order, not endpoint-list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

impl ProbeResult {
    pub fn success(
        url: impl Into<String>,
        status_code: u16,
        status_text: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            url: url.into(),
            outcome: ProbeOutcome::Success {
                status_code,
                status_text: status_text.into(),
                elapsed_seconds: elapsed.as_secs_f64(),
            },
        }
    }

    pub fn failure(url: impl Into<String>, classification: Classification, elapsed: Duration) -> Self {
        Self {
            url: url.into(),
            outcome: ProbeOutcome::Failure {
                category: classification.category,
                message: classification.message,
                elapsed_seconds: elapsed.as_secs_f64(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Success { .. })
    }

    pub fn elapsed_seconds(&self) -> f64 {
        match self.outcome {
            ProbeOutcome::Success {
                elapsed_seconds, ..
            }
            | ProbeOutcome::Failure {
                elapsed_seconds, ..
            } => elapsed_seconds,
        }
    }

    /// HTTP status code, if a response was received.
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            ProbeOutcome::Success { status_code, .. } => Some(status_code),
            ProbeOutcome::Failure { .. } => None,
        }
    }

    /// Failure category, if no response was received.
    pub fn category(&self) -> Option<FailureCategory> {
        match self.outcome {
            ProbeOutcome::Success { .. } => None,
            ProbeOutcome::Failure { category, .. } => Some(category),
        }
    }
}

/// All results of one dispatch cycle, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Round {
    results: Vec<ProbeResult>,
    elapsed: Duration,
}

impl Round {
    pub fn new(results: Vec<ProbeResult>, elapsed: Duration) -> Self {
        Self { results, elapsed }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProbeResult> {
        self.results.iter()
    }

    pub fn into_results(self) -> Vec<ProbeResult> {
        self.results
    }

    /// Wall time spent collecting the round.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn summary(&self, round: u64) -> RoundSummary {
        RoundSummary {
            round,
            total: self.len(),
            succeeded: self.succeeded(),
            failed: self.failed(),
            elapsed_seconds: self.elapsed.as_secs_f64(),
        }
    }
}

impl<'a> IntoIterator for &'a Round {
    type Item = &'a ProbeResult;
    type IntoIter = std::slice::Iter<'a, ProbeResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counts for one finished round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u64,
    pub total: usize,
    /// Probes that got any HTTP response.
    pub succeeded: usize,
    /// Probes that got no response.
    pub failed: usize,
    pub elapsed_seconds: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refused() -> Classification {
        Classification {
            category: FailureCategory::ConnectionRefused,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_success_accessors() {
        let r = ProbeResult::success("http://a", 404, "Not Found", Duration::from_millis(250));
        assert!(r.is_success());
        assert_eq!(r.status_code(), Some(404));
        assert_eq!(r.category(), None);
        assert_eq!(r.elapsed_seconds(), 0.25);
    }

    #[test]
    fn test_failure_accessors() {
        let r = ProbeResult::failure("http://b", refused(), Duration::from_millis(5));
        assert!(!r.is_success());
        assert_eq!(r.status_code(), None);
        assert_eq!(r.category(), Some(FailureCategory::ConnectionRefused));
        assert!(r.elapsed_seconds() >= 0.0);
    }

    #[test]
    fn test_round_counts() {
        let round = Round::new(
            vec![
                ProbeResult::success("http://a", 200, "OK", Duration::ZERO),
                ProbeResult::success("http://b", 500, "Internal Server Error", Duration::ZERO),
                ProbeResult::failure("http://c", refused(), Duration::ZERO),
            ],
            Duration::from_secs(2),
        );
        let summary = round.summary(4);
        assert_eq!(summary.round, 4);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.elapsed_seconds, 2.0);
    }

    #[test]
    fn test_serialized_shape() {
        let r = ProbeResult::success("http://a", 200, "OK", Duration::from_millis(500));
        let json: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert_eq!(json["url"], "http://a");
        assert_eq!(json["outcome"], "success");
        assert_eq!(json["status_code"], 200);
        assert_eq!(json["status_text"], "OK");
        assert_eq!(json["elapsed_seconds"], 0.5);

        let r = ProbeResult::failure("http://c", refused(), Duration::ZERO);
        let json: serde_json::Value = serde_json::to_value(&r).unwrap();
        assert_eq!(json["outcome"], "failure");
        assert_eq!(json["category"], "connection_refused");
        assert_eq!(json["message"], "connection refused");
    }
}
