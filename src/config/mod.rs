pub mod layout;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::utils::ValuationResult;

pub use layout::{LayoutConfig, PageRange};

pub const DEFAULT_CONFIG_PATH: &str = "config/settings.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: String,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> ValuationResult<Self> {
        let config_path = path.as_ref();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.layout.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ValuationResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: "data/exports".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.layout, LayoutConfig::default());
        assert_eq!(config.export.output_dir, "data/exports");
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/settings.toml");

        let mut config = AppConfig::default();
        config.layout.owner_claim_page = 4;
        config.layout.odometer_pages = PageRange::new(5, 9);
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert_eq!(loaded.layout.owner_claim_page, 4);
        assert_eq!(loaded.layout.odometer_pages, PageRange::new(5, 9));
    }

    #[test]
    fn partial_file_keeps_default_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[export]\noutput_dir = \"out\"\n").unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.export.output_dir, "out");
        assert_eq!(config.layout, LayoutConfig::default());
    }
}
