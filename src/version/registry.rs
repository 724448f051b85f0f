//! Release source trait for fetching the latest published version

#[cfg(test)]
use mockall::automock;

use crate::version::error::LookupError;
use crate::version::semver::Version;

/// Trait for fetching the latest release of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches the latest release of `owner/repo` and parses its tag
    ///
    /// # Arguments
    /// * `owner` - Repository owner or organization (e.g., "skanehira")
    /// * `repo` - Repository name (e.g., "version-lsp")
    ///
    /// # Returns
    /// * `Ok(Version)` - The latest version, associated with `owner/repo`
    /// * `Err(LookupError)` - If the request, decoding or tag parsing fails
    async fn latest_version(&self, owner: &str, repo: &str) -> Result<Version, LookupError>;
}
