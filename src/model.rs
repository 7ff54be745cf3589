use serde::{Deserialize, Serialize};

/// A programming book: one top-level folder of the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Folder name (e.g. "C++", "Python", "Visual Basic")
    pub name: String,
    /// API URL listing the folder contents
    pub url: String,
}

/// One image inside a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Directly fetchable URL of the image
    pub download_url: String,
}
