use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::FetchOptions;
use crate::paths;
use crate::proxy::ProxyConfig;

/// Clipboard settings (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the extracted URL list to the clipboard after printing it.
    pub enabled: bool,
    /// Seconds to wait for a clipboard helper (clip, pbcopy, xclip, xsel) before killing it.
    pub timeout_secs: u64,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 5,
        }
    }
}

/// Global configuration loaded from `~/.config/sitemapx/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapxConfig {
    /// Whole-request timeout for the sitemap GET, in seconds.
    pub timeout_secs: u64,
    /// Verify the server's TLS certificate and host name. Off by default so
    /// self-signed and misconfigured staging sites still work.
    pub verify_tls: bool,
    /// Optional `User-Agent` header for the sitemap request (None = libcurl default).
    pub user_agent: Option<String>,
    /// Optional clipboard section; if missing, built-in defaults are used.
    pub clipboard: Option<ClipboardConfig>,
}

impl Default for SitemapxConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            verify_tls: false,
            user_agent: None,
            clipboard: None,
        }
    }
}

impl SitemapxConfig {
    /// Request options for the fetch stage, with the proxy resolved by the caller.
    pub fn fetch_options(&self, proxy: Option<ProxyConfig>) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            proxy,
            verify_tls: self.verify_tls,
            user_agent: self.user_agent.clone(),
        }
    }

    pub fn clipboard(&self) -> ClipboardConfig {
        self.clipboard.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    paths::config_file()
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SitemapxConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SitemapxConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file. Keys missing from the file keep their defaults.
pub fn load_from(path: &Path) -> Result<SitemapxConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SitemapxConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
