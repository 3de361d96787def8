//! Decoding of the folder listing returned by the listing resource.
//!
//! Each row of `aaData` is `[checkbox, name_cell, size, date]`, where the first
//! two cells are markup fragments and the last two are display text.

use tracing::{debug, warn};

use crate::error::{CtfileError, Result};
use crate::markup::{extract_attribute, extract_inner_text};
use crate::models::{json_text, Entry, EntryKind, ListingEnvelope};

/// Checkbox `name` that marks a folder row.
const FOLDER_CHECKBOX_NAME: &str = "folder_ids[]";

/// Prefix of a file anchor's `href`; the remainder is the file key.
const FILE_HREF_PREFIX: &str = "/file/";

/// Minimum number of cells in a listing row.
const ROW_CELLS: usize = 4;

/// Decode one listing row into an [`Entry`].
///
/// Missing attributes or anchor text yield empty fields rather than errors.
/// Only a row with fewer than four cells is rejected.
pub fn decode_row<S: AsRef<str>>(cells: &[S]) -> Result<Entry> {
    if cells.len() < ROW_CELLS {
        return Err(CtfileError::MalformedResponse(format!(
            "listing row has {} cells, expected at least {}",
            cells.len(),
            ROW_CELLS
        )));
    }

    let checkbox = cells[0].as_ref();
    let name_cell = cells[1].as_ref();

    let kind = if extract_attribute(checkbox, "name") == FOLDER_CHECKBOX_NAME {
        EntryKind::Folder
    } else {
        EntryKind::File
    };

    let id = match kind {
        EntryKind::File => {
            let href = extract_attribute(name_cell, "href");
            href.replacen(FILE_HREF_PREFIX, "", 1)
        }
        EntryKind::Folder => extract_attribute(checkbox, "value"),
    };

    Ok(Entry {
        kind,
        id,
        name: extract_inner_text(name_cell),
        size: cells[2].as_ref().to_string(),
        date: cells[3].as_ref().to_string(),
    })
}

/// Decode a full listing body into entries, preserving row order.
///
/// The body must be a JSON object with an `aaData` array. Rows that are not
/// arrays or are too short are logged and skipped; the rest still decodes.
pub fn decode_listing(body: &[u8]) -> Result<Vec<Entry>> {
    let envelope: ListingEnvelope = serde_json::from_slice(body)?;
    debug!("Listing contains {} rows", envelope.rows.len());

    let mut entries = Vec::with_capacity(envelope.rows.len());
    for (index, row) in envelope.rows.iter().enumerate() {
        let Some(row) = row.as_array() else {
            warn!("Skipping listing row {}: not an array", index);
            continue;
        };
        let cells: Vec<String> = row.iter().map(json_text).collect();
        match decode_row(&cells) {
            Ok(entry) => entries.push(entry),
            Err(e) => warn!("Skipping listing row {}: {}", index, e),
        }
    }

    Ok(entries)
}
