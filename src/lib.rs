//! Query the "Anime Girls Holding Programming Books" repository through the
//! GitHub Contents API: list the books, list a book's images, or pick one image
//! at random.
//!
//! ```no_run
//! # async fn demo() -> aghpb::Result<()> {
//! use aghpb::RequestOptions;
//!
//! let books = aghpb::list_categories(&RequestOptions::new()).await?;
//! let first_two = aghpb::list_images("C++", &RequestOptions::new().with_limit(2)).await?;
//! let any = aghpb::pick_random_image("Visual Basic", &RequestOptions::new()).await?;
//! # Ok(())
//! # }
//! ```

pub mod books;
pub mod commands;
pub mod config;
pub mod contents;
pub mod error;
pub mod http;
pub mod model;

pub use books::{Bookshelf, list_categories, list_images, pick_random_image};
pub use config::{Config, RepoId, RequestOptions};
pub use contents::{ContentsSource, GitHubContents};
pub use error::{Error, Result};
pub use model::{Category, ImageEntry};
