//! Process-wide current version
//!
//! A convenience layer for binaries that want to configure their own version
//! once at startup and check for upgrades without passing a `Version` around.
//! The value is write-once; every read after `configure` sees the same value.

use std::sync::OnceLock;

use crate::version::checker::{UpgradeCheck, check_upgrade as check_upgrade_with};
use crate::version::error::{ConfigureError, LookupError};
use crate::version::registries::github::default_releases;
use crate::version::registry::ReleaseSource;
use crate::version::semver::Version;

static CURRENT: CurrentVersion = CurrentVersion::new();

/// Write-once holder for a current version
pub struct CurrentVersion {
    cell: OnceLock<Version>,
}

impl CurrentVersion {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    pub fn set(&self, version: Version) -> Result<(), ConfigureError> {
        self.cell
            .set(version)
            .map_err(|_| ConfigureError::AlreadyConfigured(self.get_or_zero().tagged()))
    }

    pub fn get(&self) -> Option<&Version> {
        self.cell.get()
    }

    /// The configured version, or `0.0.0` when nothing has been configured
    pub fn get_or_zero(&self) -> Version {
        self.cell.get().cloned().unwrap_or_default()
    }

    pub async fn latest<S: ReleaseSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<Version, LookupError> {
        let current = self.get().ok_or(LookupError::NotConfigured)?;
        source.latest_version(current.owner(), current.repo()).await
    }

    pub async fn check_upgrade<S: ReleaseSource + ?Sized>(
        &self,
        source: &S,
    ) -> Result<UpgradeCheck, LookupError> {
        let current = self.get().ok_or(LookupError::NotConfigured)?;
        check_upgrade_with(source, current).await
    }
}

impl Default for CurrentVersion {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets the process-wide current version. Fails if it was already set.
pub fn configure(
    major: u64,
    minor: u64,
    patch: u64,
    owner: &str,
    repo: &str,
) -> Result<(), ConfigureError> {
    CURRENT.set(Version::new(major, minor, patch).with_repository(owner, repo))
}

pub fn current() -> Option<&'static Version> {
    CURRENT.get()
}

/// The current version like "0.1.1"
pub fn string() -> String {
    CURRENT.get_or_zero().format()
}

/// The current version like "v0.1.1"
pub fn info() -> String {
    CURRENT.get_or_zero().tagged()
}

/// Fetches the latest release of the configured repository from GitHub
pub async fn get_latest_version_info() -> Result<Version, LookupError> {
    CURRENT.latest(default_releases()).await
}

/// Checks GitHub for a release newer than the configured version
pub async fn check_upgrade() -> Result<UpgradeCheck, LookupError> {
    CURRENT.check_upgrade(default_releases()).await
}
