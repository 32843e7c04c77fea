//! Configuration types and CLI options.
//!
//! `Opt` is what the binary parses from the command line; `Config` is the
//! validated form the library runs on and can be built without `clap`.

use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_CHANNEL_LIMIT, DEFAULT_INTERVAL_SECS, DEFAULT_LOG_FILE, DEFAULT_MONITOR_TIMEOUT_SECS,
    DEFAULT_SOURCE, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of diagnostic output on stderr, from most
/// restrictive (Error) to most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how diagnostic log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Console output format for probe results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned, human-readable rows
    Text,
    /// One JSON object per probe result
    Jsonl,
}

/// Whether to probe the list once or keep polling it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Probe every endpoint once, report, exit.
    Once,
    /// Repeat rounds forever, sleeping `interval` between them.
    Monitor,
}

impl Mode {
    /// Per-request timeout used when none is given on the command line.
    pub fn default_timeout_secs(self) -> u64 {
        match self {
            Mode::Once => DEFAULT_TIMEOUT_SECS,
            Mode::Monitor => DEFAULT_MONITOR_TIMEOUT_SECS,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Probe urls.txt once, append results to url_response.log
/// url_response
///
/// # Alternative list, poll every 10s with a 3s request timeout
/// url_response -f sites.txt --monitor -d 10 -t 3
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "url_response",
    version,
    about = "Checks a list of URLs for HTTP status codes and response times."
)]
pub struct Opt {
    /// File with one URL per line
    #[arg(short = 'f', long, value_parser, default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,

    /// Keep polling the list instead of probing it once
    #[arg(short, long)]
    pub monitor: bool,

    /// Seconds to wait between rounds in monitor mode
    #[arg(short = 'd', long, default_value_t = DEFAULT_INTERVAL_SECS)]
    pub interval: u64,

    /// Per-request timeout in seconds (default: 10, or 6 with --monitor)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Capacity of the result channel
    #[arg(long, default_value_t = DEFAULT_CHANNEL_LIMIT)]
    pub channel_limit: usize,

    /// Append-only log of every probe result
    #[arg(long, value_parser, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Do not write the result log
    #[arg(long)]
    pub no_log: bool,

    /// Console output: text|jsonl
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Resolves mode-dependent defaults and validates the result.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a timeout, interval or channel limit is zero.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mode = if self.monitor {
            Mode::Monitor
        } else {
            Mode::Once
        };
        let timeout_secs = self.timeout.unwrap_or_else(|| mode.default_timeout_secs());

        let config = Config {
            source: self.source,
            mode,
            interval: Duration::from_secs(self.interval),
            timeout: Duration::from_secs(timeout_secs),
            channel_limit: self.channel_limit,
            log_file: if self.no_log {
                None
            } else {
                Some(self.log_file)
            },
            output: self.output,
            color: !self.no_color && std::io::stdout().is_terminal(),
            user_agent: self.user_agent,
            log_level: self.log_level,
            log_format: self.log_format,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use url_response::Config;
/// use std::path::PathBuf;
/// use std::time::Duration;
///
/// let config = Config {
///     source: PathBuf::from("sites.txt"),
///     timeout: Duration::from_secs(3),
///     log_file: None,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint-list file
    pub source: PathBuf,

    /// Single pass or continuous monitor
    pub mode: Mode,

    /// Sleep between the end of one round and the start of the next
    pub interval: Duration,

    /// Per-request timeout, also used as the idle-connection timeout
    pub timeout: Duration,

    /// Result channel capacity
    pub channel_limit: usize,

    /// Result log path; `None` disables it
    pub log_file: Option<PathBuf>,

    /// Console output format
    pub output: OutputFormat,

    /// Colorize console output
    pub color: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Checks the values a probe round cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.channel_limit == 0 {
            return Err(ConfigError::InvalidChannelLimit);
        }
        if self.mode == Mode::Monitor && self.interval.is_zero() {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            mode: Mode::Once,
            interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            channel_limit: DEFAULT_CHANNEL_LIMIT,
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            output: OutputFormat::Text,
            color: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Opt {
        Opt::try_parse_from(args.iter()).expect("arguments should parse")
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.source, PathBuf::from("urls.txt"));
        assert_eq!(config.mode, Mode::Once);
        assert_eq!(config.interval, Duration::from_secs(30));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.channel_limit, 100);
        assert_eq!(config.log_file, Some(PathBuf::from("url_response.log")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_single_pass_timeout_default() {
        let config = parse(&["url_response"]).into_config().unwrap();
        assert_eq!(config.mode, Mode::Once);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_monitor_timeout_default() {
        let config = parse(&["url_response", "--monitor"])
            .into_config()
            .unwrap();
        assert_eq!(config.mode, Mode::Monitor);
        assert_eq!(config.timeout, Duration::from_secs(6));
        assert_eq!(config.interval, Duration::from_secs(30));
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["url_response", "-f", "sites.txt", "-m", "-d", "5", "-t", "2"])
            .into_config()
            .unwrap();
        assert_eq!(config.source, PathBuf::from("sites.txt"));
        assert_eq!(config.mode, Mode::Monitor);
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_no_log_disables_log_file() {
        let config = parse(&["url_response", "--no-log"]).into_config().unwrap();
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = parse(&["url_response", "-t", "0"]).into_config().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout));
    }

    #[test]
    fn test_zero_channel_limit_rejected() {
        let err = parse(&["url_response", "--channel-limit", "0"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidChannelLimit));
    }

    #[test]
    fn test_zero_interval_only_matters_in_monitor_mode() {
        assert!(parse(&["url_response", "-d", "0"]).into_config().is_ok());
        let err = parse(&["url_response", "-m", "-d", "0"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval));
    }
}
