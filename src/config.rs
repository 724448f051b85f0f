use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default base URL for the GitHub REST API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default User-Agent header; GitHub rejects requests without one
pub const DEFAULT_USER_AGENT: &str = concat!("version-checker/", env!("CARGO_PKG_VERSION"));

/// Timeout for a whole lookup request in milliseconds (30 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Timeout for establishing a connection in milliseconds (10 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;

/// Number of idle HTTP clients kept around for reuse
pub const DEFAULT_MAX_IDLE_CLIENTS: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Lookup configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Base URL of the releases API, without trailing slash
    pub base_url: String,
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    pub max_idle_clients: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
            max_idle_clients: DEFAULT_MAX_IDLE_CLIENTS,
        }
    }
}

impl CheckerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Reads a JSON config file. Missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the config from `path` if given, otherwise from the default
    /// location if a file exists there, otherwise returns defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = config_path();
        if default_path.is_file() {
            debug!("Loading config from {:?}", default_path);
            return Self::from_file(&default_path);
        }

        Ok(Self::default())
    }
}

/// Returns the path to the config file.
/// Uses $XDG_CONFIG_HOME/version-checker/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-checker/config.json.
pub fn config_path() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
        ".config",
    )
    .join("config.json")
}

/// Returns the path to the data directory for version-checker.
/// Uses $XDG_DATA_HOME/version-checker if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-checker,
/// or ./version-checker if neither is available.
pub fn data_dir() -> PathBuf {
    app_dir_with_env(
        std::env::var("XDG_DATA_HOME").ok(),
        dirs::home_dir(),
        ".local/share",
    )
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-checker.log")
}

fn app_dir_with_env(xdg_dir: Option<String>, home_dir: Option<PathBuf>, home_sub: &str) -> PathBuf {
    let base = xdg_dir
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(home_sub)))
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("version-checker")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn checker_config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "timeoutMs": 1000
        }))
        .unwrap();

        assert_eq!(result.timeout_ms, 1000);
        assert_eq!(result.base_url, DEFAULT_BASE_URL);
        assert_eq!(result.max_idle_clients, DEFAULT_MAX_IDLE_CLIENTS);
    }

    #[test]
    fn checker_config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<CheckerConfig>(json!({
            "baseUrl": "https://github.example.com/api/v3",
            "userAgent": "my-tool/1.0",
            "timeoutMs": 5000,
            "connectTimeoutMs": 2000,
            "maxIdleClients": 1
        }))
        .unwrap();

        assert_eq!(
            result,
            CheckerConfig {
                base_url: "https://github.example.com/api/v3".to_string(),
                user_agent: "my-tool/1.0".to_string(),
                timeout_ms: 5000,
                connect_timeout_ms: 2000,
                max_idle_clients: 1,
            }
        );
        assert_eq!(result.timeout(), Duration::from_secs(5));
        assert_eq!(result.connect_timeout(), Duration::from_secs(2));
    }

    #[test]
    fn load_reads_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"userAgent": "from-file"}}"#).unwrap();

        let result = CheckerConfig::load(Some(file.path())).unwrap();

        assert_eq!(result.user_agent, "from-file");
        assert_eq!(result.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn load_reports_missing_explicit_path() {
        let result = CheckerConfig::load(Some(Path::new("/nonexistent/config.json")));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_reports_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = CheckerConfig::from_file(file.path());

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn app_dir_with_env_uses_xdg_dir_when_set() {
        let path = app_dir_with_env(
            Some("/tmp/test-data".to_string()),
            Some(PathBuf::from("/home/user")),
            ".local/share",
        );

        assert_eq!(path, PathBuf::from("/tmp/test-data/version-checker"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_home_subdirectory() {
        let path = app_dir_with_env(None, Some(PathBuf::from("/home/user")), ".config");

        assert_eq!(path, PathBuf::from("/home/user/.config/version-checker"));
    }

    #[test]
    fn app_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = app_dir_with_env(None, None, ".local/share");
        assert_eq!(path, PathBuf::from("./version-checker"));
    }
}
