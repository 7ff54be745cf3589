//! Access to a repository's directory listings.
//!
//! [`ContentsSource`] is the seam between the book operations and the network:
//! implementations hand back the raw JSON listing, and [`entry`] turns it into
//! checked entries.

mod entry;
mod github;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::config::RequestOptions;
use crate::error::Result;

pub use entry::{ContentEntry, EntryKind, decode_listing};
pub use github::GitHubContents;

/// Characters left untouched when a book name is embedded in a URL path.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a single URL path component ("C++" -> "C%2B%2B").
pub fn encode_component(name: &str) -> String {
    utf8_percent_encode(name, COMPONENT).to_string()
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentsSource: Send + Sync {
    /// Listing of the repository root.
    async fn list_root(&self, options: &RequestOptions) -> Result<Value>;

    /// Listing of the folder named `book`. The name is passed unencoded.
    async fn list_book(&self, book: &str, options: &RequestOptions) -> Result<Value>;
}
