//! Base URL normalization.

use reqwest::Url;

use crate::error::{Error, Result};

/// Path segment every ETAPI route lives under.
pub const API_PATH: &str = "/etapi";

/// Normalize a user-supplied Trilium URL into an ETAPI base URL.
///
/// Appends [`API_PATH`] when it is missing and strips trailing slashes, so
/// `https://host/`, `https://host` and `https://host/etapi/` all become
/// `https://host/etapi`. Reachability is not checked.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] carrying the original input when the URL
/// has no `http://` or `https://` scheme, or does not parse.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let invalid = || Error::InvalidUrl(raw.to_string());

    let trimmed = raw.trim().trim_end_matches('/');
    let lower = trimmed.to_ascii_lowercase();
    if !(lower.starts_with("http://") || lower.starts_with("https://")) {
        return Err(invalid());
    }

    let mut url = trimmed.to_string();
    if !url.ends_with(API_PATH) {
        url.push_str(API_PATH);
    }

    let parsed = Url::parse(&url).map_err(|_| invalid())?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid());
    }

    Ok(url)
}
