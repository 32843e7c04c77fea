//! Error handling and failure classification.
//!
//! This module provides:
//! - The fixed `FailureCategory` taxonomy for transport-level probe failures
//! - The ordered substring classifier that maps raw error text to a category
//! - Error-chain flattening for `reqwest` errors
//! - Error types for initialization, configuration and round collection
//!
//! HTTP status codes are never errors here: a 404 or 503 is a successful
//! probe. Only failures to get a response at all are classified.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{classify_transport_error, describe_reqwest_error, error_chain_text};
pub use categorization::Classification;
pub use types::{ConfigError, FailureCategory, InitializationError, RoundError};
