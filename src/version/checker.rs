//! Upgrade check: compare the running version against the latest release

use serde::Serialize;
use tracing::debug;

use crate::version::error::LookupError;
use crate::version::registries::github::{default_releases, lookup_latest};
use crate::version::registry::ReleaseSource;
use crate::version::semver::Version;

/// Result of an upgrade check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeCheck {
    /// Latest published version
    pub latest: Version,
    /// Whether `latest` is strictly greater than the current version
    pub is_newer: bool,
}

/// Serializable summary of an upgrade check, used for JSON output
#[derive(Debug, Serialize)]
pub struct UpgradeReport {
    pub owner: String,
    pub repo: String,
    pub current: String,
    pub latest: String,
    pub upgrade_available: bool,
}

impl UpgradeCheck {
    pub fn report(&self, current: &Version) -> UpgradeReport {
        UpgradeReport {
            owner: current.owner().to_string(),
            repo: current.repo().to_string(),
            current: current.tagged(),
            latest: self.latest.tagged(),
            upgrade_available: self.is_newer,
        }
    }
}

/// Check whether `source` has a release newer than `current`.
///
/// Equal versions and a current version ahead of the latest release
/// (e.g. an unreleased build) both report `is_newer == false`.
pub async fn check_upgrade<S: ReleaseSource + ?Sized>(
    source: &S,
    current: &Version,
) -> Result<UpgradeCheck, LookupError> {
    let latest = source
        .latest_version(current.owner(), current.repo())
        .await?;
    let is_newer = latest > *current;

    debug!(
        "{}/{}: current {}, latest {}, newer: {}",
        current.owner(),
        current.repo(),
        current,
        latest,
        is_newer
    );

    Ok(UpgradeCheck { latest, is_newer })
}

impl Version {
    /// Fetches the latest release of this version's repository from GitHub
    pub async fn latest(&self) -> Result<Version, LookupError> {
        lookup_latest(self.owner(), self.repo()).await
    }

    /// Checks GitHub for a release newer than this version
    pub async fn check_upgrade(&self) -> Result<UpgradeCheck, LookupError> {
        check_upgrade(default_releases(), self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::registry::MockReleaseSource;
    use rstest::rstest;

    fn source_returning(major: u64, minor: u64, patch: u64) -> MockReleaseSource {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_version()
            .withf(|owner, repo| owner == "skanehira" && repo == "version-lsp")
            .times(1)
            .returning(move |owner, repo| {
                Ok(Version::new(major, minor, patch).with_repository(owner, repo))
            });
        source
    }

    fn current(major: u64, minor: u64, patch: u64) -> Version {
        Version::new(major, minor, patch).with_repository("skanehira", "version-lsp")
    }

    #[rstest]
    #[case((1, 0, 0), (1, 0, 1), true)]
    #[case((1, 0, 0), (1, 1, 0), true)]
    #[case((1, 9, 9), (2, 0, 0), true)]
    #[case((1, 2, 3), (1, 2, 3), false)] // already latest
    #[case((2, 0, 0), (1, 9, 9), false)] // running ahead of the release
    #[tokio::test]
    async fn check_upgrade_reports_newer_only_when_latest_is_greater(
        #[case] running: (u64, u64, u64),
        #[case] published: (u64, u64, u64),
        #[case] expected: bool,
    ) {
        let source = source_returning(published.0, published.1, published.2);
        let current = current(running.0, running.1, running.2);

        let result = check_upgrade(&source, &current).await.unwrap();

        assert_eq!(result.latest, Version::new(published.0, published.1, published.2));
        assert_eq!(result.latest.owner(), "skanehira");
        assert_eq!(result.is_newer, expected);
    }

    #[tokio::test]
    async fn check_upgrade_propagates_lookup_error() {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_version()
            .returning(|owner, repo| Err(LookupError::NotFound(format!("{}/{}", owner, repo))));

        let result = check_upgrade(&source, &current(1, 0, 0)).await;

        assert!(matches!(result, Err(LookupError::NotFound(ref name)) if name == "skanehira/version-lsp"));
    }

    #[tokio::test]
    async fn check_upgrade_accepts_trait_object() {
        let source: Box<dyn ReleaseSource> = Box::new(source_returning(0, 6, 0));

        let result = check_upgrade(source.as_ref(), &current(0, 5, 1)).await.unwrap();

        assert!(result.is_newer);
    }

    #[test]
    fn report_uses_tagged_versions() {
        let check = UpgradeCheck {
            latest: Version::new(1, 1, 0),
            is_newer: true,
        };

        let report = check.report(&current(1, 0, 0));

        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            serde_json::json!({
                "owner": "skanehira",
                "repo": "version-lsp",
                "current": "v1.0.0",
                "latest": "v1.1.0",
                "upgrade_available": true
            })
        );
    }
}
