//! Application configuration and constants.
//!
//! This module provides:
//! - Default values for the CLI and the probing engine
//! - CLI option parsing (`Opt`) and the validated library `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Mode, Opt, OutputFormat};
