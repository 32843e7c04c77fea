//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The probe HTTP client (timeouts, no connection reuse)
//! - The logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::{init_probe_client, ProbeSettings};
pub use logger::init_logger_with;
