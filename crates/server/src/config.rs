use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use webfs_capabilities::DEFAULT_DENYLIST;

type Result<T> = anyhow::Result<T>;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "WEBFS_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "webfs.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
    /// Path fragments that are never served inline.
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
}

impl ServerConfig {
    /// Loads the file named by `WEBFS_CONFIG` (or `webfs.toml`), falling back
    /// to defaults when it does not exist.
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let path = Path::new(&path);
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            denylist: default_denylist(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8800))
}

fn default_denylist() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::ServerConfig;

    #[test]
    fn test_parse_config() {
        let raw = r#"
bind = "127.0.0.1:9000"
denylist = [".iso", ".img"]
"#;

        let config = ServerConfig::from_str(raw).expect("config should parse");
        assert_eq!(config.bind.to_string(), "127.0.0.1:9000");
        assert_eq!(config.denylist, vec![".iso", ".img"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServerConfig::from_str("").expect("empty config should parse");
        assert_eq!(config.bind.port(), 8800);
        assert_eq!(config.denylist, vec![".dmg", ".iso"]);
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        assert!(ServerConfig::from_str(r#"bind = "not an address""#).is_err());
    }
}
