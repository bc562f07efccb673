//! Configuration loading for the byeol downloader.

use std::fs;
use std::path::PathBuf;

use byeol_core::SceneOptions;
use color_eyre::eyre::{Result, WrapErr};
use directories::{ProjectDirs, UserDirs};
use serde::Deserialize;

/// Application configuration, read from `config.toml` in the platform
/// config directory. Every field has a default, so a missing or partial
/// file works.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Base URL of the download backend.
    #[serde(default = "Config::default_backend_url")]
    pub backend_url: String,
    /// Directory downloaded files are saved into.
    #[serde(default = "Config::default_download_dir")]
    pub download_dir: PathBuf,
    /// Starfield tuning.
    #[serde(default)]
    pub scene: SceneOptions,
}

impl Config {
    fn default_backend_url() -> String {
        "http://localhost:5000".to_string()
    }

    fn default_download_dir() -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("downloads"))
    }

    /// Load the config file, falling back to defaults when it is absent.
    pub fn load() -> Result<Self> {
        let Some(dirs) = ProjectDirs::from("", "", "byeol") else {
            return Ok(Self::default());
        };
        let path = dirs.config_dir().join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw =
            fs::read_to_string(&path).wrap_err_with(|| format!("reading {}", path.display()))?;
        toml::from_str(&raw).wrap_err_with(|| format!("parsing {}", path.display()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: Self::default_backend_url(),
            download_dir: Self::default_download_dir(),
            scene: SceneOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend_url, "http://localhost:5000");
    }

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let config: Config = toml::from_str(
            r#"
            backend_url = "http://media-box.local:5000"

            [scene]
            spawn_interval_ms = 500
            max_active = 16
            "#,
        )
        .unwrap();

        assert_eq!(config.backend_url, "http://media-box.local:5000");
        assert_eq!(config.scene.spawn_interval_ms, 500);
        assert_eq!(config.scene.max_active, 16);
        // Untouched fields keep their defaults.
        assert_eq!(config.scene.star_count, 1000);
        assert_eq!(config.download_dir, Config::default_download_dir());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(toml::from_str::<Config>("backend_url = 5000").is_err());
    }
}
