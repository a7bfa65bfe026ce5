use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chat::canned::{DEFAULT_DELAY, DEFAULT_REPLY};
use crate::models::Coordinate;
use crate::query::RadiusKm;

const CONFIG_PATH_ENV: &str = "HANOISTAY_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "hanoistay.toml";

/// Top-level configuration, loaded from `hanoistay.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// trace, debug, info, warn or error
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Where the scan map opens and how wide the slider starts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub default_radius_km: f64,
}

impl MapConfig {
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lng)
    }

    pub fn default_radius(&self) -> RadiusKm {
        RadiusKm(self.default_radius_km)
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 21.0285,
            center_lng: 105.8542,
            default_radius_km: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub reply: String,
    pub delay_ms: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply: DEFAULT_REPLY.to_string(),
            delay_ms: DEFAULT_DELAY.as_millis() as u64,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Fall back to defaults when the file is missing or broken
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                Self::default()
            }
        }
    }
}

/// `--config` flag, then `HANOISTAY_CONFIG`, then `./hanoistay.toml`
pub fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    if let Some(p) = flag {
        return p.to_path_buf();
    }
    if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_hanoi() {
        let config = AppConfig::default();
        assert_eq!(config.map.center(), Coordinate::new(21.0285, 105.8542));
        assert_eq!(config.map.default_radius().meters(), 5000.0);
        assert_eq!(config.chat.delay_ms, 1000);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\ndefault_radius_km = 2.5\n\n[chat]\ndelay_ms = 10").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.map.default_radius_km, 2.5);
        assert_eq!(config.map.center_lat, 21.0285);
        assert_eq!(config.chat.delay_ms, 10);
        assert_eq!(config.chat.reply, DEFAULT_REPLY);
    }

    #[test]
    fn broken_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map\ncenter_lat = ").unwrap();
        assert!(AppConfig::load(file.path()).is_err());
        assert_eq!(AppConfig::load_or_default(file.path()), AppConfig::default());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn env_var_names_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("from-env.toml");
        std::fs::write(&path, "[general]\nlog_level = \"debug\"\n").unwrap();

        std::env::set_var(CONFIG_PATH_ENV, &path);
        let resolved = resolve_config_path(None);
        let flagged = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        std::env::remove_var(CONFIG_PATH_ENV);

        assert_eq!(resolved, path);
        assert_eq!(flagged, PathBuf::from("/tmp/custom.toml"));
        assert_eq!(AppConfig::load(&resolved).unwrap().general.log_level, "debug");
    }

    #[test]
    fn explicit_flag_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
    }
}
