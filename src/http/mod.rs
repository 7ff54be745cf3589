//! Thin HTTP client for JSON GET requests against the GitHub API.

mod client;

pub use client::{HttpClient, bearer_header, mask_token};
