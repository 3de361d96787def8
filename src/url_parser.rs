//! Share link parser for turning ctfile links into share and folder IDs.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CtfileError, Result};

/// Share links look like `https://<mirror>/d/<id>` or `https://<mirror>/dir/<id>`.
/// The provider rotates mirror hosts, so any host is accepted.
static SHARE_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/\s]+/(?:d|dir)/([A-Za-z0-9-]+)").expect("Invalid share URL regex")
});

static FOLDER_PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[?&]folder_id=(\d+)").expect("Invalid folder parameter regex")
});

/// Share IDs are alphanumeric runs joined by hyphens.
static SHARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").expect("Invalid share ID regex"));

/// Share and folder to request from `getdir.php`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRef {
    pub share_id: String,
    /// Empty for the share root.
    pub folder_id: String,
}

/// Parse a share link or validate a raw share ID.
///
/// Supports:
/// - `https://<host>/d/<ID>`
/// - `https://<host>/dir/<ID>`
/// - either of the above with a `folder_id=<N>` query parameter
/// - Raw share ID
///
/// # Examples
///
/// ```
/// use ctfile::url_parser::parse_share_link;
///
/// let share = parse_share_link("https://url57.ctfile.com/d/123-456-abc?p=1").unwrap();
/// assert_eq!(share.share_id, "123-456-abc");
/// assert_eq!(share.folder_id, "");
///
/// let share = parse_share_link("https://545c.com/dir/123-456-abc?folder_id=42").unwrap();
/// assert_eq!(share.folder_id, "42");
/// ```
pub fn parse_share_link(link: &str) -> Result<ShareRef> {
    let trimmed = link.trim();

    if let Some(captures) = SHARE_URL_REGEX.captures(trimmed) {
        if let Some(id) = captures.get(1) {
            let folder_id = FOLDER_PARAM_REGEX
                .captures(trimmed)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            return Ok(ShareRef {
                share_id: id.as_str().to_string(),
                folder_id,
            });
        }
    }

    if SHARE_ID_REGEX.is_match(trimmed) {
        return Ok(ShareRef {
            share_id: trimmed.to_string(),
            folder_id: String::new(),
        });
    }

    Err(CtfileError::InvalidShareLink(link.to_string()))
}
