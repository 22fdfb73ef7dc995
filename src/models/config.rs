//! Configuration model.

use crate::core::tags::ReleaseTag;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TMDB configuration.
    pub tmdb: TmdbConfig,
    /// Organize pipeline configuration.
    pub organize: OrganizeConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// API root, without trailing slash.
    pub base_url: String,
}

/// Which steps the organize pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizeConfig {
    /// Drop the scene group suffix.
    pub strip_group: bool,
    /// Release tags to strip.
    pub strip_tags: Vec<ReleaseTag>,
    /// Confirm parsed episodes against the catalog.
    pub validate: bool,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
        }
    }
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            strip_group: true,
            strip_tags: ReleaseTag::ALL.to_vec(),
            validate: true,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("release_organizer")
}

/// Load configuration from the default location.
///
/// A missing or unreadable file yields defaults; `TMDB_API_KEY` always wins
/// over the file's key.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    let mut config = match load_config_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            if config_path.exists() {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
            }
            Config::default()
        }
    };

    if let Ok(key) = std::env::var("TMDB_API_KEY") {
        config.tmdb.api_key = Some(key);
    }

    config
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
}
