//! Service configuration loaded from YAML.
//!
//! ```yaml
//! log_level: info
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//! store:
//!   buffer_size: 32
//! ```
//!
//! Every field is optional and falls back to the values above.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV: &str = "CONTOSO_PIZZA_CONFIG";

/// Config file used when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub log_level: String,
    pub server: ServerConfig,
    pub store: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            server: ServerConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Capacity of the store's request channel.
    pub buffer_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

impl AppConfig {
    /// Parses a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Reads and parses the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Loads the file named by [`CONFIG_ENV`], else [`DEFAULT_CONFIG_PATH`].
    ///
    /// A missing default file yields the built-in defaults; a missing file named
    /// explicitly through the environment is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(std::env::var_os(CONFIG_ENV), Path::new(DEFAULT_CONFIG_PATH))
    }

    fn resolve(explicit: Option<OsString>, default: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None if default.exists() => Self::load(default),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = AppConfig::from_yaml("server:\n  port: 9000\n").unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.store.buffer_size, 32);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "log_level: debug\nserver:\n  host: 127.0.0.1\n  port: 3000\nstore:\n  buffer_size: 4\n";
        let config = AppConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.store.buffer_size, 4);
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = AppConfig::from_yaml("server: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::load("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    /// The `config/default.yaml` shipped at the workspace root.
    fn shipped_default() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config/default.yaml")
    }

    /// Writes `content` to a per-test file under the system temp dir.
    fn temp_config(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "contoso-pizza-{}-{}.yaml",
            name,
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_resolve_explicit_missing_file_is_read_error() {
        let explicit = Some(OsString::from("does/not/exist.yaml"));

        let err = AppConfig::resolve(explicit, &shipped_default()).unwrap_err();
        match err {
            ConfigError::Read { path, .. } => assert_eq!(path, Path::new("does/not/exist.yaml")),
            other => panic!("expected Read error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_explicit_malformed_file_is_parse_error() {
        let path = temp_config("malformed", "server: [not, a, map]\n");

        let result = AppConfig::resolve(Some(path.clone().into_os_string()), &shipped_default());
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_resolve_explicit_file_wins_over_default() {
        let path = temp_config("explicit", "server:\n  port: 9100\n");

        let result = AppConfig::resolve(Some(path.clone().into_os_string()), &shipped_default());
        fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_resolve_missing_default_uses_built_in_values() {
        let config = AppConfig::resolve(None, Path::new("does/not/exist.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_existing_default_is_parsed() {
        let path = temp_config("default", "log_level: warn\nstore:\n  buffer_size: 8\n");

        let result = AppConfig::resolve(None, &path);
        fs::remove_file(&path).unwrap();

        let config = result.unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.store.buffer_size, 8);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_resolve_reads_shipped_default_file() {
        let config = AppConfig::resolve(None, &shipped_default()).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
