//! Per-call request options and client configuration.

use std::str::FromStr;

use anyhow::anyhow;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_OWNER: &str = "cat-milk";
pub const DEFAULT_REPO: &str = "Anime-Girls-Holding-Programming-Books";

/// Branch the book contents are read from.
pub const CONTENTS_REF: &str = "master";

/// Options recognised by the listing operations.
///
/// - `auth_token`: sent as `Authorization: Bearer <token>` when present and non-empty.
/// - `limit`: caps the image listing when positive. Zero and negative values mean
///   "no limit", the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub auth_token: Option<String>,
    pub limit: Option<i64>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The token to forward, ignoring an empty string.
    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|t| !t.is_empty())
    }

    /// Number of entries to keep, or `None` for the whole listing.
    pub fn effective_limit(&self) -> Option<usize> {
        match self.limit {
            Some(n) if n > 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => None,
        }
    }
}

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl Default for RepoId {
    fn default() -> Self {
        RepoId {
            owner: DEFAULT_OWNER.to_string(),
            repo: DEFAULT_REPO.to_string(),
        }
    }
}

impl std::fmt::Display for RepoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// Where the books live and how the HTTP client identifies itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub repo: RepoId,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            repo: RepoId::default(),
            user_agent: format!("aghpb/{}", env!("AGHPB_VERSION")),
        }
    }
}

impl Config {
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_repo(mut self, repo: RepoId) -> Self {
        self.repo = repo;
        self
    }

    /// `{api_url}/repos/{owner}/{repo}`
    pub fn repo_base(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.api_url.trim_end_matches('/'),
            self.repo.owner,
            self.repo.repo
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(RequestOptions::new().effective_limit(), None);
        assert_eq!(RequestOptions::new().with_limit(0).effective_limit(), None);
        assert_eq!(RequestOptions::new().with_limit(-3).effective_limit(), None);
        assert_eq!(RequestOptions::new().with_limit(2).effective_limit(), Some(2));
    }

    #[test]
    fn test_empty_token_is_ignored() {
        assert_eq!(RequestOptions::new().token(), None);
        assert_eq!(RequestOptions::new().with_token("").token(), None);
        assert_eq!(
            RequestOptions::new().with_token("abc").token(),
            Some("abc")
        );
    }

    #[test]
    fn test_repo_id_parse() {
        let repo: RepoId = "owner/repo".parse().unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.repo_base(),
            "https://api.github.com/repos/cat-milk/Anime-Girls-Holding-Programming-Books"
        );
        assert!(config.user_agent.starts_with("aghpb/"));
    }

    #[test]
    fn test_repo_base_trims_trailing_slash() {
        let config = Config::default()
            .with_api_url("http://127.0.0.1:1234/")
            .with_repo("o/r".parse().unwrap());
        assert_eq!(config.repo_base(), "http://127.0.0.1:1234/repos/o/r");
    }
}
