use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_HOST: &str = "https://gitea.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub destructive_actions: bool,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub max_pages: Option<u32>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            destructive_actions: false,
            page_size: None,
            max_pages: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file missing, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).context("read config")?;
        let config = serde_json::from_str(&data).context("parse config")?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("create config directory")?;
        }
        let data = serde_json::to_string_pretty(self).context("serialize config")?;
        fs::write(path, data).context("write config")?;
        Ok(())
    }

    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            host: self.host.trim_end_matches('/').to_string(),
            destructive_actions: self.destructive_actions,
            page_size: self.page_size.unwrap_or(0),
            max_pages: self.max_pages,
        }
    }
}

/// Immutable settings handed to a provider client at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub host: String,
    /// Allows delete calls to reach the remote service.
    pub destructive_actions: bool,
    /// Items per page; 0 leaves the choice to the server.
    pub page_size: u32,
    /// Optional ceiling on pages fetched by one list call.
    pub max_pages: Option<u32>,
}

impl ProviderConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().trim_end_matches('/').to_string(),
            destructive_actions: false,
            page_size: 0,
            max_pages: None,
        }
    }

    pub fn with_destructive_actions(mut self, allowed: bool) -> Self {
        self.destructive_actions = allowed;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Host without scheme, used as the domain of returned refs.
    pub fn domain(&self) -> &str {
        self.host
            .strip_prefix("https://")
            .or_else(|| self.host.strip_prefix("http://"))
            .unwrap_or(&self.host)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let project =
        ProjectDirs::from("com", "forge", "forge-gitea").context("resolve project dirs")?;
    Ok(project.config_dir().join("config.json"))
}
