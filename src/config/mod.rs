// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Domain data (videos, profiles) is never persisted; only user preferences
//! such as the default volume and theme mode live here.

mod defaults;

pub use defaults::{
    DEFAULT_AUTOPLAY, DEFAULT_OVERLAY_TIMEOUT_SECS, DEFAULT_VOLUME, MAX_VOLUME, MIN_VOLUME,
    UNMUTE_FALLBACK_VOLUME,
};

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedReel";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub default_volume: Option<f32>,
    #[serde(default)]
    pub overlay_timeout_secs: Option<u64>,
    #[serde(default)]
    pub autoplay: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            default_volume: Some(DEFAULT_VOLUME),
            overlay_timeout_secs: Some(DEFAULT_OVERLAY_TIMEOUT_SECS),
            autoplay: Some(DEFAULT_AUTOPLAY),
        }
    }
}

impl Config {
    /// Default volume with bounds applied, so a hand-edited settings file
    /// cannot request an impossible level.
    pub fn volume(&self) -> f32 {
        self.default_volume
            .unwrap_or(DEFAULT_VOLUME)
            .clamp(MIN_VOLUME, MAX_VOLUME)
    }

    pub fn overlay_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(
            self.overlay_timeout_secs
                .unwrap_or(DEFAULT_OVERLAY_TIMEOUT_SECS),
        )
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_AUTOPLAY)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.theme_mode, ThemeMode::System);
        assert!((config.volume() - DEFAULT_VOLUME).abs() < f32::EPSILON);
        assert_eq!(config.overlay_timeout().as_secs(), 3);
        assert!(!config.autoplay());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            theme_mode: ThemeMode::Dark,
            default_volume: Some(0.25),
            overlay_timeout_secs: Some(5),
            autoplay: Some(true),
        };
        save_to_path(&config, &path).expect("save config");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.default_volume, Some(0.25));
        assert_eq!(loaded.overlay_timeout_secs, Some(5));
        assert_eq!(loaded.autoplay, Some(true));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not valid toml [[[").expect("write garbage");

        let loaded = load_from_path(&path).expect("load config");
        assert_eq!(loaded.theme_mode, ThemeMode::System);
    }

    #[test]
    fn volume_is_clamped_to_bounds() {
        let config = Config {
            default_volume: Some(4.0),
            ..Config::default()
        };
        assert!((config.volume() - MAX_VOLUME).abs() < f32::EPSILON);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("theme_mode = \"light\"").expect("parse");
        assert_eq!(config.theme_mode, ThemeMode::Light);
        assert!(config.default_volume.is_none());
        assert!(!config.autoplay());
    }
}
