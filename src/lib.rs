//! Check GitHub releases for a newer version of a tool.
//!
//! ```no_run
//! use version_checker::Version;
//!
//! # async fn run() -> Result<(), version_checker::LookupError> {
//! let current = Version::new(1, 2, 3).with_repository("skanehira", "version-lsp");
//! let check = current.check_upgrade().await?;
//! if check.is_newer {
//!     println!("{} is available", check.latest.tagged());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;
pub mod version;

pub use version::checker::{UpgradeCheck, check_upgrade};
pub use version::error::{ConfigureError, LookupError};
pub use version::registries::github::{GitHubReleases, lookup_latest};
pub use version::registry::ReleaseSource;
pub use version::semver::Version;
