//! Failure categorization.
//!
//! The HTTP client only hands us an error value whose wording is the most
//! reliable signal of what went wrong, so categories are derived from the
//! flattened error text rather than from error kinds.

use std::error::Error as StdError;
use std::fmt::Write;

use super::types::FailureCategory;

/// Ordered classification rules. The first rule with a matching substring
/// wins; matching is case-sensitive. Each rule lists the classic wording
/// first, followed by the phrasing used by our HTTP stack for the same
/// condition.
const CLASSIFICATION_RULES: &[(FailureCategory, &str, &[&str])] = &[
    (
        FailureCategory::NoHost,
        "no host",
        &["no such host", "dns error", "failed to lookup address"],
    ),
    (
        FailureCategory::Unreachable,
        "unreachable",
        &["request canceled", "timed out"],
    ),
    (
        FailureCategory::ConnectionRefused,
        "connection refused",
        &["connection refused", "Connection refused", "actively refused"],
    ),
];

/// Category and display message for one failed probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: FailureCategory,
    pub message: String,
}

/// Classifies raw transport error text.
///
/// Pure function of its input: the same text always yields the same
/// classification. Unmatched text is returned verbatim as an `Other`
/// message.
///
/// # Examples
///
/// ```
/// use url_response::{classify_transport_error, FailureCategory};
///
/// let c = classify_transport_error("dial tcp: lookup x: no such host");
/// assert_eq!(c.category, FailureCategory::NoHost);
/// assert_eq!(c.message, "no host");
/// ```
pub fn classify_transport_error(raw: &str) -> Classification {
    for (category, message, needles) in CLASSIFICATION_RULES {
        if needles.iter().any(|needle| raw.contains(needle)) {
            return Classification {
                category: *category,
                message: (*message).to_string(),
            };
        }
    }
    Classification {
        category: FailureCategory::Other,
        message: raw.to_string(),
    }
}

/// Flattens an error and its `source()` chain into one line.
///
/// Causes whose text is already contained in the previous link are skipped,
/// since some errors repeat their source in their own `Display`.
pub fn error_chain_text(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut previous = text.clone();
    let mut current = err.source();
    while let Some(cause) = current {
        let cause_text = cause.to_string();
        if !previous.contains(&cause_text) {
            let _ = write!(text, ": {}", cause_text);
        }
        previous = cause_text;
        current = cause.source();
    }
    text
}

/// Raw error text for a failed request, without the request URL.
///
/// The URL is dropped so that a hostname or path can never match a
/// classification rule by accident.
pub fn describe_reqwest_error(err: reqwest::Error) -> String {
    let err = err.without_url();
    error_chain_text(&err)
}
