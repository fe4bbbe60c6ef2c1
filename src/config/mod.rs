use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default = "default_web_port")]
    pub web_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_port: default_api_port(),
            web_port: default_web_port(),
        }
    }
}

impl ServerConfig {
    pub fn api_addr(&self) -> String {
        format!("{}:{}", self.host, self.api_port)
    }

    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.host, self.web_port)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Backing JSON file, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ViewConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_skeleton_count")]
    pub skeleton_count: usize,
    /// Artificial wait before fetching, to make the skeleton visible in development.
    #[serde(default)]
    pub simulated_delay_ms: u64,
    /// 0 disables the timeout.
    #[serde(default)]
    pub fetch_timeout_secs: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            title: default_title(),
            skeleton_count: default_skeleton_count(),
            simulated_delay_ms: 0,
            fetch_timeout_secs: 0,
        }
    }
}

impl ViewConfig {
    pub const MAX_SKELETONS: usize = 100;

    pub fn simulated_delay(&self) -> Option<Duration> {
        (self.simulated_delay_ms > 0).then(|| Duration::from_millis(self.simulated_delay_ms))
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_secs > 0).then(|| Duration::from_secs(self.fetch_timeout_secs))
    }

    pub fn validate(&self) -> Result<()> {
        if self.skeleton_count == 0 {
            anyhow::bail!("view.skeleton_count must be greater than 0");
        }
        if self.skeleton_count > Self::MAX_SKELETONS {
            anyhow::bail!("view.skeleton_count must be {} or less", Self::MAX_SKELETONS);
        }
        let url = url::Url::parse(&self.api_url)
            .map_err(|e| anyhow::anyhow!("view.api_url '{}' is not a valid URL: {}", self.api_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("view.api_url must use http or https, got '{}'", url.scheme());
        }
        Ok(())
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    4001
}

fn default_web_port() -> u16 {
    3000
}

fn default_catalog_path() -> String {
    "gallery.json".to_string()
}

fn default_api_url() -> String {
    "http://localhost:4001/api/gallery".to_string()
}

fn default_title() -> String {
    "Picture Gallery".to_string()
}

fn default_skeleton_count() -> usize {
    10
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not read config file '{}': {}", path.display(), e)
        })?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }
        tracing::info!("No config at {}, using defaults", path.display());
        let config = Config::default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.api_port == 0 {
            anyhow::bail!("server.api_port must be greater than 0");
        }
        if self.server.web_port == 0 {
            anyhow::bail!("server.web_port must be greater than 0");
        }
        if self.catalog.path.trim().is_empty() {
            anyhow::bail!("catalog.path must not be empty");
        }
        self.view.validate()?;
        Ok(())
    }
}
