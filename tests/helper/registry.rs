//! Release source test utilities

use std::collections::HashMap;

use async_trait::async_trait;
use mockito::{Mock, ServerGuard};

use version_checker::{LookupError, ReleaseSource, Version};

/// In-memory release source keyed by `owner/repo`
pub struct MockReleases {
    tags: HashMap<String, String>,
}

impl MockReleases {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    pub fn with_release(mut self, owner: &str, repo: &str, tag: &str) -> Self {
        self.tags
            .insert(format!("{}/{}", owner, repo), tag.to_string());
        self
    }
}

#[async_trait]
impl ReleaseSource for MockReleases {
    async fn latest_version(&self, owner: &str, repo: &str) -> Result<Version, LookupError> {
        let name = format!("{}/{}", owner, repo);
        match self.tags.get(&name) {
            Some(tag) => Ok(Version::parse_tag(tag)?.with_repository(owner, repo)),
            None => Err(LookupError::NotFound(name)),
        }
    }
}

/// Register a `releases/latest` endpoint answering with `tag`
pub async fn mock_latest_release(
    server: &mut ServerGuard,
    owner: &str,
    repo: &str,
    tag: &str,
) -> Mock {
    server
        .mock(
            "GET",
            format!("/repos/{}/{}/releases/latest", owner, repo).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            serde_json::json!({
                "tag_name": tag,
                "name": format!("Release {}", tag),
                "draft": false,
                "prerelease": false,
            })
            .to_string(),
        )
        .create_async()
        .await
}
