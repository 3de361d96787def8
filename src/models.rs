//! Data models for shares, listing entries and API envelopes.

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Mapping from delivery tier label (e.g. `"fast"`) to a direct download URL.
pub type DownloadVariants = HashMap<String, String>;

/// Whether a listing entry is a file or a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Folder,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Folder => write!(f, "folder"),
        }
    }
}

/// A file or folder inside a share.
///
/// `id` is the file key for files and the numeric folder id for folders.
/// `size` and `date` are the provider's pre-formatted display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub kind: EntryKind,
    pub id: String,
    pub name: String,
    pub size: String,
    pub date: String,
}

impl Entry {
    pub fn new(
        kind: EntryKind,
        id: impl Into<String>,
        name: impl Into<String>,
        size: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            name: name.into(),
            size: size.into(),
            date: date.into(),
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            EntryKind::File => '-',
            EntryKind::Folder => 'd',
        };
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            marker, self.id, self.size, self.date, self.name
        )
    }
}

/// A remotely hosted folder and its decoded listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub share_id: String,
    pub folder_id: String,
    /// Relative listing resource handed out by the metadata endpoint.
    pub listing_url: String,
    pub folder_name: Option<String>,
    pub entries: Vec<Entry>,
}

impl Share {
    /// Files in listing order.
    pub fn files(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_file())
    }

    /// Folders in listing order.
    pub fn folders(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_folder())
    }
}

/// Response from `getdir.php`.
#[derive(Debug, Deserialize)]
pub struct ShareEnvelope {
    /// Listing resource, relative to the API base.
    pub url: String,
    #[serde(default)]
    pub folder_name: Option<String>,
}

/// Response from the listing resource. Rows and cells are kept as raw JSON
/// values so that one odd row does not fail the whole listing.
#[derive(Debug, Deserialize)]
pub struct ListingEnvelope {
    #[serde(rename = "aaData")]
    pub rows: Vec<serde_json::Value>,
}

/// Render a JSON scalar as the text the provider meant: strings verbatim,
/// null as empty, anything else in its JSON form.
pub(crate) fn json_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_envelope_deserialize() {
        let json = r#"{
            "code": 200,
            "folder_name": "Movies",
            "url": "/iajax_guest.php?item=file_act&action=file_list&folder_id=0"
        }"#;

        let envelope: ShareEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.url,
            "/iajax_guest.php?item=file_act&action=file_list&folder_id=0"
        );
        assert_eq!(envelope.folder_name.as_deref(), Some("Movies"));
    }

    #[test]
    fn test_share_envelope_requires_url() {
        let result: std::result::Result<ShareEnvelope, _> =
            serde_json::from_str(r#"{"code": 404}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_listing_envelope_ignores_other_fields() {
        let json = r#"{"sEcho": 1, "iTotalRecords": 1, "aaData": [["a", "b", "c", "d"]]}"#;
        let envelope: ListingEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.rows.len(), 1);
        assert_eq!(envelope.rows[0].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_json_text() {
        assert_eq!(json_text(&serde_json::json!("x")), "x");
        assert_eq!(json_text(&serde_json::json!(12)), "12");
        assert_eq!(json_text(&serde_json::Value::Null), "");
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new(EntryKind::Folder, "99", "MyFolder", "-", "2021-01-01");
        assert_eq!(format!("{}", entry), "d\t99\t-\t2021-01-01\tMyFolder");

        let entry = Entry::new(EntryKind::File, "abc123", "movie.mkv", "1.2GB", "2021-02-02");
        assert!(format!("{}", entry).starts_with("-\tabc123"));
    }

    #[test]
    fn test_share_files_and_folders() {
        let share = Share {
            share_id: "s".to_string(),
            folder_id: String::new(),
            listing_url: "/l".to_string(),
            folder_name: None,
            entries: vec![
                Entry::new(EntryKind::Folder, "1", "dir", "-", ""),
                Entry::new(EntryKind::File, "a", "one", "1KB", ""),
                Entry::new(EntryKind::File, "b", "two", "2KB", ""),
            ],
        };

        let files: Vec<_> = share.files().map(|e| e.id.as_str()).collect();
        assert_eq!(files, vec!["a", "b"]);
        assert_eq!(share.folders().count(), 1);
    }
}
