use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/dispo/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispoConfig {
    /// Filename extensions the CLI accepts, dot included, matched
    /// case-insensitively against the end of the decoded name. The library
    /// default extractor is fixed to ".pdf"; this list only drives the CLI
    /// boundary filter.
    #[serde(default = "default_accepted_extensions")]
    pub accepted_extensions: Vec<String>,
}

fn default_accepted_extensions() -> Vec<String> {
    vec![".pdf".to_string()]
}

impl Default for DispoConfig {
    fn default() -> Self {
        Self {
            accepted_extensions: default_accepted_extensions(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dispo")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DispoConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DispoConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DispoConfig = toml::from_str(&data)?;
    Ok(cfg)
}
