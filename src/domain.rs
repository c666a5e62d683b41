/// URL formatting, validation and hostname extraction for Leads Tracker
use url::Url;

use crate::config::{ACCEPTED_PREFIXES, DEFAULT_SCHEME, LINKABLE_SCHEMES};
use crate::error::{LeadError, Result};

/// Turn raw manual input into an absolute URL
///
/// 1. Trim surrounding whitespace
/// 2. Reject empty input
/// 3. Prepend `https://` unless the text already starts with `http://` or `https://`
/// 4. Reject the result if it does not parse as a URL
///
/// Examples:
/// - "example.com" → "https://example.com"
/// - "  http://example.com/a  " → "http://example.com/a"
pub fn format_input(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LeadError::EmptyInput);
    }

    let formatted = if ACCEPTED_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };

    match Url::parse(&formatted) {
        Ok(_) => Ok(formatted),
        Err(_) => Err(LeadError::InvalidUrl(formatted)),
    }
}

/// Hostname of a URL, if it parses and has a non-empty host
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(host.to_string()),
        _ => None,
    }
}

/// Text shown for a lead: its hostname, or the raw URL when there is none
pub fn display_label(url: &str) -> String {
    hostname(url).unwrap_or_else(|| url.to_string())
}

/// The URL to put in a link `href`, only for schemes that are safe to open
pub fn link_href(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    if LINKABLE_SCHEMES.iter().any(|scheme| *scheme == parsed.scheme()) {
        Some(url.to_string())
    } else {
        None
    }
}
