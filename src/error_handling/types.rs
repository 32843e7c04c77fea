//! Error type definitions.
//!
//! This module defines the probe failure taxonomy and the error enums used
//! during startup and round collection.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid option values. All of these are fatal at startup.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("request timeout must be at least 1 second")]
    InvalidTimeout,

    #[error("channel limit must be at least 1")]
    InvalidChannelLimit,

    #[error("monitor interval must be at least 1 second")]
    InvalidInterval,
}

/// Errors raised while collecting a round.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// Every sender was dropped before the round was complete.
    ///
    /// Each worker sends exactly one result, so this only happens if a
    /// worker task died before sending.
    #[error("result channel closed after {received} of {expected} results")]
    ChannelClosed { expected: usize, received: usize },
}

/// Classification of a transport-level probe failure.
///
/// HTTP error statuses are not failures and never map to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    /// DNS resolution failed.
    NoHost,
    /// The request was canceled or timed out.
    Unreachable,
    /// The peer actively refused the TCP connection.
    ConnectionRefused,
    /// Anything else; the raw error text is kept as the message.
    Other,
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureCategory {
    /// Stable machine-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::NoHost => "no_host",
            FailureCategory::Unreachable => "unreachable",
            FailureCategory::ConnectionRefused => "connection_refused",
            FailureCategory::Other => "other",
        }
    }
}
