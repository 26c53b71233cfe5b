//! Extraction of asset identifiers from decoded QR payloads.
//!
//! Printed asset labels embed a `Link: <url>` line whose final path segment
//! is the numeric asset id. Older labels encode a bare app URL containing
//! `/mobile/asset/` or `/user/asset/` followed by the identifier.

use http::Uri;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{AppError, AppResult};

/// `Link:` marker on printed labels; the rest of the line is the URL.
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Link:\s*(.*)").unwrap());

const ASSET_PATH_MARKERS: [&str; 2] = ["/mobile/asset/", "/user/asset/"];

/// Extract the candidate asset identifier from a decoded payload.
///
/// Payloads that match neither label format yield
/// [`AppError::UnrecognizedPayload`]; a matched `Link:` URL whose final
/// segment is not numeric yields [`AppError::MalformedAssetId`].
pub fn extract_identifier(decoded_text: &str) -> AppResult<String> {
    if let Some(caps) = RE_LINK.captures(decoded_text) {
        let full_url = caps[1].trim();
        // An empty capture ("Link:" with nothing after it) falls through
        // to the bare-URL branch.
        if !full_url.is_empty() {
            let candidate = last_path_segment(full_url)?;
            if candidate.is_empty() || !is_numeric(&candidate) {
                return Err(AppError::MalformedAssetId(candidate));
            }
            return Ok(candidate);
        }
    }

    if ASSET_PATH_MARKERS
        .iter()
        .any(|marker| decoded_text.contains(marker))
    {
        // Bare app URL: the identifier is whatever follows the last slash.
        let id = decoded_text.rsplit('/').next().unwrap_or("").trim();
        return Ok(id.to_string());
    }

    Err(AppError::UnrecognizedPayload)
}

fn last_path_segment(full_url: &str) -> AppResult<String> {
    let uri: Uri = full_url
        .parse()
        .map_err(|_| AppError::MalformedAssetId(full_url.to_string()))?;
    Ok(uri.path().rsplit('/').next().unwrap_or("").to_string())
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
