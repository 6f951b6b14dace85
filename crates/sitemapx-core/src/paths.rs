//! Per-user file locations: XDG base directories on Unix, `%APPDATA%` elsewhere.

use anyhow::Result;
use std::path::PathBuf;

const APP_NAME: &str = "sitemapx";

/// `~/.config/sitemapx/config.toml`. Parent directories are created.
#[cfg(unix)]
pub(crate) fn config_file() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// `~/.local/state/sitemapx/sitemapx.log`. Parent directories are created.
#[cfg(unix)]
pub(crate) fn log_file() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.place_state_file("sitemapx.log")?)
}

#[cfg(not(unix))]
pub(crate) fn config_file() -> Result<PathBuf> {
    Ok(app_dir("APPDATA")?.join("config.toml"))
}

#[cfg(not(unix))]
pub(crate) fn log_file() -> Result<PathBuf> {
    Ok(app_dir("LOCALAPPDATA")?.join("sitemapx.log"))
}

#[cfg(not(unix))]
fn app_dir(var: &str) -> Result<PathBuf> {
    let base = std::env::var_os(var)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("{} is not set", var))?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
