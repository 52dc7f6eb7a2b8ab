// Site configuration service
// Loads and persists the TOML site configuration

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::config::SiteConfig;

/// Service for loading and saving the site configuration file
pub struct ConfigService;

impl ConfigService {
    /// Default configuration path under the platform data directory
    pub fn default_config_path() -> Result<PathBuf> {
        let data_dir = directories::BaseDirs::new()
            .context("Failed to get base directories")?
            .data_dir()
            .to_path_buf();

        Ok(data_dir.join("save-the-date").join("site.toml"))
    }

    /// Load the configuration from a TOML file
    pub fn load(path: &Path) -> Result<SiteConfig> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing; a present-but-broken file is still an error
    pub fn load_or_default(path: &Path) -> Result<SiteConfig> {
        if !path.exists() {
            log::info!("No config at {:?}; using built-in defaults", path);
            return Ok(SiteConfig::default());
        }
        Self::load(path)
    }

    /// Write the configuration to a TOML file, creating parent directories
    pub fn save(config: &SiteConfig, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let raw = toml::to_string_pretty(config).context("Failed to serialize config")?;
        fs::write(path, raw).with_context(|| format!("Failed to write config file {:?}", path))?;

        log::info!("Saved site config to {:?}", path);
        Ok(())
    }
}
