//! The three book operations: list books, list a book's images, pick one at random.

use log::debug;
use rand::Rng;

use crate::config::{Config, RequestOptions};
use crate::contents::{ContentEntry, ContentsSource, GitHubContents, decode_listing};
use crate::error::{Error, Result};
use crate::model::{Category, ImageEntry};

/// Entry point for querying a books repository through a [`ContentsSource`].
///
/// Holds no mutable state; any number of calls may run concurrently.
pub struct Bookshelf<S: ContentsSource = GitHubContents> {
    source: S,
}

impl Bookshelf<GitHubContents> {
    /// Shelf backed by the public "Anime Girls Holding Programming Books" repository.
    pub fn github() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(GitHubContents::new(config)?))
    }
}

impl<S: ContentsSource> Bookshelf<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Lists the folders at the repository root, in upstream order.
    #[tracing::instrument(skip(self, options))]
    pub async fn list_categories(&self, options: &RequestOptions) -> Result<Vec<Category>> {
        let listing = self.source.list_root(options).await?;

        let entries = decode_listing(listing).ok_or_else(|| {
            Error::Parse("expected a JSON array of repository contents".to_string())
        })?;

        let categories: Vec<Category> = entries
            .into_iter()
            .filter_map(ContentEntry::into_category)
            .collect();

        debug!("Found {} book(s)", categories.len());
        Ok(categories)
    }

    /// Lists the images of `book`, truncated to `options.limit` when it is positive.
    #[tracing::instrument(skip(self, options))]
    pub async fn list_images(&self, book: &str, options: &RequestOptions) -> Result<Vec<ImageEntry>> {
        let mut images = self.fetch_images(book, options).await?;

        if let Some(limit) = options.effective_limit() {
            images.truncate(limit);
        }

        Ok(images)
    }

    /// Picks one image of `book` uniformly at random. `options.limit` is ignored.
    #[tracing::instrument(skip(self, options))]
    pub async fn pick_random_image(&self, book: &str, options: &RequestOptions) -> Result<ImageEntry> {
        let images = self.fetch_images(book, options).await?;
        choose_image(book, images, &mut rand::rng())
    }

    /// Same as [`Bookshelf::pick_random_image`] with a caller-supplied generator.
    #[tracing::instrument(skip(self, options, rng))]
    pub async fn pick_random_image_with<R: Rng + ?Sized>(
        &self,
        book: &str,
        options: &RequestOptions,
        rng: &mut R,
    ) -> Result<ImageEntry> {
        let images = self.fetch_images(book, options).await?;
        choose_image(book, images, rng)
    }

    /// Every file of `book` that has a download URL, in upstream order.
    async fn fetch_images(&self, book: &str, options: &RequestOptions) -> Result<Vec<ImageEntry>> {
        if book.trim().is_empty() {
            return Err(Error::InvalidArgument("book name is required".to_string()));
        }

        let listing = self
            .source
            .list_book(book, options)
            .await
            .map_err(|e| e.for_book(book))?;

        let entries = decode_listing(listing).ok_or_else(|| Error::InvalidContent {
            book: book.to_string(),
        })?;

        let images: Vec<ImageEntry> = entries
            .into_iter()
            .filter_map(ContentEntry::into_image)
            .collect();

        debug!("Found {} image(s) in {:?}", images.len(), book);
        Ok(images)
    }
}

fn choose_image<R: Rng + ?Sized>(
    book: &str,
    mut images: Vec<ImageEntry>,
    rng: &mut R,
) -> Result<ImageEntry> {
    if images.is_empty() {
        return Err(Error::NoImagesFound {
            book: book.to_string(),
        });
    }
    let index = rng.random_range(0..images.len());
    Ok(images.swap_remove(index))
}

/// Lists the books of the public repository.
pub async fn list_categories(options: &RequestOptions) -> Result<Vec<Category>> {
    Bookshelf::github()?.list_categories(options).await
}

/// Lists the images of one book of the public repository.
pub async fn list_images(book: &str, options: &RequestOptions) -> Result<Vec<ImageEntry>> {
    Bookshelf::github()?.list_images(book, options).await
}

/// Picks a random image from one book of the public repository.
pub async fn pick_random_image(book: &str, options: &RequestOptions) -> Result<ImageEntry> {
    Bookshelf::github()?.pick_random_image(book, options).await
}
