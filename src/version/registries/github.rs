//! GitHub Releases API source

use std::sync::LazyLock;

use serde::Deserialize;
use tracing::debug;

use crate::config::CheckerConfig;
use crate::version::error::LookupError;
use crate::version::pool::ClientPool;
use crate::version::registry::ReleaseSource;
use crate::version::semver::Version;

/// Shared source used by the free functions and `Version` convenience methods
static DEFAULT_RELEASES: LazyLock<GitHubReleases> = LazyLock::new(GitHubReleases::default);

/// Response from `GET /repos/{owner}/{repo}/releases/latest`
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Release source backed by the GitHub Releases API
pub struct GitHubReleases {
    pool: ClientPool,
    base_url: String,
}

impl GitHubReleases {
    /// Creates a new GitHubReleases with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self::from_config(CheckerConfig {
            base_url: base_url.to_string(),
            ..CheckerConfig::default()
        })
    }

    pub fn from_config(config: CheckerConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            pool: ClientPool::new(config),
            base_url,
        }
    }

    fn latest_release_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases/latest", self.base_url, owner, repo)
    }
}

impl Default for GitHubReleases {
    fn default() -> Self {
        Self::from_config(CheckerConfig::default())
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn latest_version(&self, owner: &str, repo: &str) -> Result<Version, LookupError> {
        let url = self.latest_release_url(owner, repo);
        debug!("Fetching latest release: {}", url);

        let response = {
            let client = self.pool.acquire()?;
            client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .send()
                .await?
        };

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(format!("{}/{}", owner, repo)));
        }

        let headers = response.headers();
        let rate_limit_exhausted = headers
            .get("x-ratelimit-remaining")
            .is_some_and(|v| v.as_bytes() == b"0");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || (status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted)
        {
            let retry_after = headers
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(LookupError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            debug!("GitHub API returned status {}: {}", status, url);
            return Err(LookupError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let release: Release = response
            .json()
            .await
            .map_err(|e| LookupError::InvalidResponse(e.to_string()))?;

        debug!("Latest release of {}/{} is {}", owner, repo, release.tag_name);

        Ok(Version::parse_tag(&release.tag_name)?.with_repository(owner, repo))
    }
}

/// Shared source pointed at the public GitHub API
pub fn default_releases() -> &'static GitHubReleases {
    &DEFAULT_RELEASES
}

/// Fetches the latest release of `owner/repo` from GitHub
pub async fn lookup_latest(owner: &str, repo: &str) -> Result<Version, LookupError> {
    default_releases().latest_version(owner, repo).await
}
