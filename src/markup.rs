//! Narrow extractors for the markup fragments embedded in listing rows.
//!
//! The listing endpoint returns single tags such as
//! `<input type=checkbox name="file_ids[]" value="1">` or
//! `<a href="/file/abc123">movie.mkv</a>` as plain JSON strings. Only an
//! attribute value or the text of the first anchor is ever needed, so these
//! helpers match exactly that and nothing more. Both return an empty string
//! when the fragment does not contain what was asked for.

use regex::Regex;
use std::sync::LazyLock;

/// Text between the first `<a ...>` and the following `</a>`.
static ANCHOR_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<a(?:\s[^>]*)?>(.*?)</a>").expect("Invalid anchor regex")
});

/// One attribute token: a name, optionally followed by `=` and a quoted or
/// bare value. Quoted values are consumed whole, so text inside them is never
/// taken for another attribute.
static ATTRIBUTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+([^\s"'<>/=]+)(?:\s*=\s*("[^"]*"|'[^']*'|[^\s"'>]+))?"#)
        .expect("Invalid attribute regex")
});

/// Extract the value of `attr_name` from a single-tag fragment.
///
/// Values may be double-quoted, single-quoted or bare, and attributes may
/// appear in any order. Attribute names match case-insensitively and only as
/// whole names, so asking for `name` never picks up `data-name`.
///
/// # Examples
///
/// ```
/// use ctfile::markup::extract_attribute;
///
/// let tag = r#"<input type=checkbox name="folder_ids[]" value='99'>"#;
/// assert_eq!(extract_attribute(tag, "name"), "folder_ids[]");
/// assert_eq!(extract_attribute(tag, "value"), "99");
/// assert_eq!(extract_attribute(tag, "type"), "checkbox");
/// assert_eq!(extract_attribute(tag, "href"), "");
/// ```
pub fn extract_attribute(fragment: &str, attr_name: &str) -> String {
    ATTRIBUTE_REGEX
        .captures_iter(fragment)
        .find(|captures| captures[1].eq_ignore_ascii_case(attr_name))
        .and_then(|captures| captures.get(2))
        .map(|value| unquote(value.as_str()).to_string())
        .unwrap_or_default()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Extract the inner text of the first anchor in `fragment`.
///
/// ```
/// use ctfile::markup::extract_inner_text;
///
/// assert_eq!(extract_inner_text(r##"<a href="#">MyFolder</a>"##), "MyFolder");
/// assert_eq!(extract_inner_text("MyFolder"), "");
/// ```
pub fn extract_inner_text(fragment: &str) -> String {
    ANCHOR_TEXT_REGEX
        .captures(fragment)
        .and_then(|captures| captures.get(1))
        .map(|text| text.as_str().to_string())
        .unwrap_or_default()
}
