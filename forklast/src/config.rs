//! Configuration management.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::fork::DEFAULT_TITLE_MAX_CHARS;

/// Environment variable overriding `host.server_url`.
pub const SERVER_URL_ENV: &str = "OPENCODE_SERVER_URL";

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub host: HostConfig,
    #[serde(default)]
    pub bridge: BridgeConfig,
    #[serde(default)]
    pub fork: ForkConfig,
}

/// Where the opencode server lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Base URL of the opencode server
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Project directory sent with every request (server default when unset)
    #[serde(default)]
    pub directory: Option<String>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            directory: None,
        }
    }
}

fn default_server_url() -> String {
    "http://127.0.0.1:4096".to_string()
}

/// Hook bridge settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            listen_port: default_listen_port(),
        }
    }
}

const fn default_listen_port() -> u16 {
    4097
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkConfig {
    /// Title length for `fork-last-message` before it gets an ellipsis
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl Default for ForkConfig {
    fn default() -> Self {
        Self {
            title_max_chars: default_title_max_chars(),
        }
    }
}

const fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

impl Config {
    /// `~/.config/forklast/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("forklast").join("config.toml"))
    }

    /// Load from an explicit path, or from the default path if it exists.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path)?,
                _ => Self::default(),
            },
        };
        config.override_server_url(std::env::var(SERVER_URL_ENV).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Replace the server URL when a non-empty value is given.
    pub fn override_server_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.host.server_url = url;
        }
    }
}
