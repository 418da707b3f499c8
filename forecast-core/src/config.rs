use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_BASE_URL: &str = "https://www.metaweather.com/api/location";

/// Location ids fetched when nothing else is configured.
pub const DEFAULT_LOCATIONS: &[&str] = &[
    "44418", "2358820", "2471217", "2459115", "4118", "2372071", "615702", "968019", "727232",
    "650272",
];

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// base_url = "https://www.metaweather.com/api/location"
/// locations = ["44418", "2358820"]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_locations() -> Vec<String> {
    DEFAULT_LOCATIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self { base_url: default_base_url(), locations: default_locations() }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), locations = cfg.locations.len(), "loaded config");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast-fanout", "forecast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Replace the base URL after checking it parses as an absolute URL.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        let trimmed = base_url.trim();
        Url::parse(trimmed).with_context(|| format!("Invalid base URL '{trimmed}'"))?;
        self.base_url = trimmed.to_string();
        Ok(())
    }

    /// Append a location id. Duplicates are kept; each one is fetched separately.
    pub fn add_location(&mut self, id: &str) -> Result<()> {
        let id = id.trim();
        if id.is_empty() {
            return Err(anyhow!("Location id must not be empty"));
        }
        self.locations.push(id.to_string());
        Ok(())
    }

    /// Remove every occurrence of `id`. Returns how many were removed.
    pub fn remove_location(&mut self, id: &str) -> usize {
        let before = self.locations.len();
        self.locations.retain(|l| l != id);
        before - self.locations.len()
    }

    /// Replace the location list from a comma separated string, e.g. "44418, 4118".
    pub fn set_locations_from_str(&mut self, list: &str) -> Result<()> {
        let parsed: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if parsed.is_empty() {
            return Err(anyhow!("At least one location id is required"));
        }

        self.locations = parsed;
        Ok(())
    }
}
