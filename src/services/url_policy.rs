// Input normalisation for names and URLs entered by the user.
// URLs without an http(s) scheme get `https://` prepended, then must parse
// as an absolute URL with a host.

use url::Url;

use crate::types::errors::{DashboardError, Result};

/// Trims a display name, rejecting it if nothing is left.
pub fn normalize_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DashboardError::Validation("Name cannot be empty".to_string()));
    }
    Ok(name.to_string())
}

/// Trims a URL and prefixes `https://` when no http(s) scheme is present.
///
/// The returned string is the prefixed input, not the parser's canonical
/// form, so `mail.co` becomes `https://mail.co` (no trailing slash).
pub fn normalize_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DashboardError::Validation("URL cannot be empty".to_string()));
    }

    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed = Url::parse(&candidate)
        .map_err(|e| DashboardError::Validation(format!("Invalid URL '{}': {}", trimmed, e)))?;
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(candidate),
        _ => Err(DashboardError::Validation(format!(
            "Invalid URL '{}': missing host",
            trimmed
        ))),
    }
}
