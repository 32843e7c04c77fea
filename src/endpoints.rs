//! Endpoint list loading and request-URL validation.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};

/// Endpoints read from a list file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointList {
    /// Lines that are valid request URLs.
    pub valid: Vec<String>,
    /// Non-empty, non-comment lines that are not.
    pub rejected: Vec<String>,
}

/// Returns `true` if `candidate` can be sent as an HTTP request URL.
///
/// The string must parse as an absolute URL with an `http` or `https`
/// scheme and a non-empty host. Nothing is added or normalized.
pub fn is_request_url(candidate: &str) -> bool {
    match url::Url::parse(candidate) {
        Ok(parsed) => {
            matches!(parsed.scheme(), "http" | "https")
                && parsed.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Splits lines into valid endpoints and rejected lines.
///
/// Blank lines and lines starting with `#` are skipped silently; everything
/// else is trimmed and validated with [`is_request_url`].
pub fn parse_endpoints<R: BufRead>(reader: R) -> Result<EndpointList> {
    let mut list = EndpointList::default();

    for line in reader.lines() {
        let line = line.context("Failed to read endpoint list")?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if is_request_url(trimmed) {
            list.valid.push(trimmed.to_string());
        } else {
            warn!("Skipping invalid URL: {trimmed}");
            list.rejected.push(trimmed.to_string());
        }
    }

    Ok(list)
}

/// Reads the endpoint list file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened or read. This is fatal for the run.
pub fn load_endpoints(path: &Path) -> Result<EndpointList> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open endpoint list {}", path.display()))?;
    let list = parse_endpoints(std::io::BufReader::new(file))
        .with_context(|| format!("Failed to read endpoint list {}", path.display()))?;

    info!(
        "Loaded {} endpoint{} from {} ({} rejected)",
        list.valid.len(),
        if list.valid.len() == 1 { "" } else { "s" },
        path.display(),
        list.rejected.len()
    );
    Ok(list)
}
