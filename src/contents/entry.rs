//! Checked decoding of Contents API listings.

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::model::{Category, ImageEntry};

/// Value of the `type` field of a listing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[default]
    #[serde(other)]
    Other,
}

/// One element of a listing, with only the fields the books need.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    /// `url`, `size` and `download_url` are kept as raw JSON so that an odd
    /// value only affects that field, never the whole entry.
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub download_url: Option<Value>,
}

impl ContentEntry {
    /// A folder with a name and a contents URL.
    pub fn into_category(self) -> Option<Category> {
        if self.kind != EntryKind::Dir || self.name.is_empty() {
            return None;
        }
        match self.url {
            Some(Value::String(url)) => Some(Category {
                name: self.name,
                url,
            }),
            _ => None,
        }
    }

    /// A file with a string `download_url`.
    pub fn into_image(self) -> Option<ImageEntry> {
        if self.kind != EntryKind::File {
            return None;
        }
        match self.download_url {
            Some(Value::String(download_url)) => Some(ImageEntry {
                name: self.name,
                size: self.size.as_ref().and_then(Value::as_u64).unwrap_or_default(),
                download_url,
            }),
            _ => None,
        }
    }
}

/// Decodes each element of a top-level JSON array.
///
/// Returns `None` when `value` is not an array. Elements that do not decode
/// are skipped, so one odd entry never hides the rest of the listing.
pub fn decode_listing(value: Value) -> Option<Vec<ContentEntry>> {
    let Value::Array(items) = value else {
        return None;
    };

    let entries = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping listing entry {}: {}", index, e);
                None
            }
        })
        .collect();

    Some(entries)
}
