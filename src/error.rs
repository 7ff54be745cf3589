//! Error type shared by every listing operation.

use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the listing operations.
///
/// Every variant is returned to the caller as-is; nothing is recovered or
/// retried internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller passed an unusable argument (blank book name, malformed token).
    #[error("{0}")]
    InvalidArgument(String),

    /// The API answered with a status outside the 2xx range.
    #[error("{}", upstream_message(.status, .status_text, .book))]
    Upstream {
        status: u16,
        status_text: String,
        book: Option<String>,
    },

    /// A book listing was valid JSON but not an array.
    #[error("The content of the book \"{book}\" is not valid")]
    InvalidContent { book: String },

    /// A book holds no downloadable images.
    #[error("No images found for book \"{book}\"")]
    NoImagesFound { book: String },

    /// The response body could not be decoded.
    #[error("Failed to parse GitHub API response: {0}")]
    Parse(String),

    /// The request never produced a response.
    #[error("Failed to send request to GitHub API: {0}")]
    Transport(#[from] reqwest::Error),
}

impl Error {
    pub(crate) fn upstream(status: StatusCode) -> Self {
        Error::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            book: None,
        }
    }

    /// Attach the requested book name to an upstream failure.
    pub(crate) fn for_book(self, name: &str) -> Self {
        match self {
            Error::Upstream {
                status,
                status_text,
                book: None,
            } => Error::Upstream {
                status,
                status_text,
                book: Some(name.to_string()),
            },
            other => other,
        }
    }

    /// HTTP status of an upstream failure, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Upstream { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn upstream_message(status: &u16, status_text: &str, book: &Option<String>) -> String {
    match book {
        Some(book) => format!("Could not fetch the book \"{}\" (status {})", book, status),
        None => format!("GitHub API error: {} {}", status, status_text)
            .trim_end()
            .to_string(),
    }
}
