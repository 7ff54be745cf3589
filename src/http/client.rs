//! HTTP client that issues a single GET and decodes the JSON body.
//!
//! Failures are reported on the first attempt; nothing here retries.

use log::debug;
use reqwest::{
    Client, RequestBuilder,
    header::{AUTHORIZATION, HeaderValue},
};
use serde_json::Value;

use crate::error::{Error, Result};

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a reqwest Client that identifies itself with `user_agent`.
    /// GitHub rejects API requests without a User-Agent.
    pub fn with_user_agent(user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::new(client))
    }

    /// Performs a GET request and decodes the body as JSON.
    #[tracing::instrument(skip(self, token))]
    pub async fn get_json(&self, url: &str, token: Option<&str>) -> Result<Value> {
        debug!("GET JSON from {}...", url);
        self.send(self.client.get(url), token).await
    }

    /// Performs a GET request with query parameters and decodes the body as JSON.
    #[tracing::instrument(skip(self, query, token))]
    pub async fn get_json_with_query(
        &self,
        url: &str,
        query: &[(&str, &str)],
        token: Option<&str>,
    ) -> Result<Value> {
        debug!("GET JSON from {} with query {:?}...", url, query);
        self.send(self.client.get(url).query(query), token).await
    }

    async fn send(&self, mut request: RequestBuilder, token: Option<&str>) -> Result<Value> {
        if let Some(token) = token {
            debug!("Using bearer token {}", mask_token(token));
            request = request.header(AUTHORIZATION, bearer_header(token)?);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            debug!("Request failed with status {}", status);
            return Err(Error::upstream(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| Error::Parse(e.to_string()))
    }
}

/// `Bearer <token>` as a sensitive header value.
pub fn bearer_header(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        Error::InvalidArgument(
            "Authorization token contains characters not allowed in an HTTP header".to_string(),
        )
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Shortens a token to its first and last four characters for log output.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
