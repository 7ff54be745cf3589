//! GitHub Contents API implementation.

use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::config::{CONTENTS_REF, Config, RequestOptions};
use crate::error::Result;
use crate::http::HttpClient;

use super::{ContentsSource, encode_component};

/// Reads listings from `{api_url}/repos/{owner}/{repo}/contents`.
pub struct GitHubContents {
    http_client: HttpClient,
    repo_base: String,
}

impl GitHubContents {
    /// Create a source for the repository described by `config`.
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::with_user_agent(&config.user_agent)?;
        Ok(Self::from_http_client(http_client, config))
    }

    /// Create from an existing HttpClient.
    pub fn from_http_client(http_client: HttpClient, config: &Config) -> Self {
        Self {
            http_client,
            repo_base: config.repo_base(),
        }
    }

    /// URL of the repository root listing.
    pub fn root_url(&self) -> String {
        format!("{}/contents", self.repo_base)
    }

    /// URL of a book's listing, without the `ref` query.
    pub fn book_url(&self, book: &str) -> String {
        format!("{}/contents/{}", self.repo_base, encode_component(book))
    }
}

#[async_trait]
impl ContentsSource for GitHubContents {
    #[tracing::instrument(skip(self, options))]
    async fn list_root(&self, options: &RequestOptions) -> Result<Value> {
        let url = self.root_url();
        debug!("Fetching books from {}...", url);
        self.http_client.get_json(&url, options.token()).await
    }

    #[tracing::instrument(skip(self, options))]
    async fn list_book(&self, book: &str, options: &RequestOptions) -> Result<Value> {
        let url = self.book_url(book);
        debug!("Fetching images of {:?} from {}...", book, url);
        self.http_client
            .get_json_with_query(&url, &[("ref", CONTENTS_REF)], options.token())
            .await
    }
}
