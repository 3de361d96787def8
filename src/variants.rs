//! Download tier resolution for `getfile.php` responses.
//!
//! The response is a flat object whose keys are chosen by the provider, e.g.
//! `vip_fast_url`, `vip_normal_url`. Every `vip_<label>_url` key becomes a
//! `label -> url` pair, so new tiers show up without a schema change.

use regex::Regex;
use std::sync::LazyLock;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::{json_text, DownloadVariants};

/// Tier key: literal `vip_`, a label without digits, literal `_url`.
static VARIANT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^vip_(\D*)_url$").expect("Invalid variant key regex"));

/// Return the tier label for a `vip_<label>_url` key.
pub fn variant_label(key: &str) -> Option<&str> {
    VARIANT_KEY_REGEX
        .captures(key)
        .and_then(|captures| captures.get(1))
        .map(|label| label.as_str())
}

/// Collect all tier URLs from an already parsed response object.
pub fn resolve_variants(object: &Map<String, Value>) -> DownloadVariants {
    object
        .iter()
        .filter_map(|(key, value)| {
            variant_label(key).map(|label| (label.to_string(), json_text(value)))
        })
        .collect()
}

/// Parse a `getfile.php` body and collect its tier URLs.
pub fn decode_variants(body: &[u8]) -> Result<DownloadVariants> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(resolve_variants(&object))
}
