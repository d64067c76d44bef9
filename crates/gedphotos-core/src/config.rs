use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/gedphotos/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GedphotosConfig {
    /// Directory photos are written to, relative to the working directory unless absolute.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Receive buffer (chunk) size in bytes handed to libcurl.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    /// Maximum number of redirects followed per photo.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional User-Agent header; none is sent when missing.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("photos")
}

fn default_buffer_size() -> usize {
    8192
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for GedphotosConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            buffer_size: default_buffer_size(),
            max_redirections: default_max_redirections(),
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gedphotos")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GedphotosConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GedphotosConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: GedphotosConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
