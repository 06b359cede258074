//! Application configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! changes.

use anyhow::Context;
use roster::{EXPORT_FILE_NAME, GENERATION_OPTIONS, PLACEHOLDER_IMAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Image reference for newly added members
    pub placeholder_image: String,
    /// File name used by "download data"
    pub export_file_name: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    /// Generations offered by the add-member form
    pub generation_options: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            export_file_name: EXPORT_FILE_NAME.to_string(),
            log_level: "info".to_string(),
            generation_options: GENERATION_OPTIONS.iter().map(|key| key.to_string()).collect(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        let config: AppConfig = serde_json::from_slice(&data)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Tracing level, falling back to INFO for unknown names
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_file(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "family_tree_config_{prefix}_{}_{}.json",
            std::process::id(),
            nanos
        ))
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let path = temp_file("partial");
        fs::write(&path, r#"{ "export_file_name": "raza-family.json" }"#).unwrap();

        let config = AppConfig::load(&path).expect("partial config should load");
        assert_eq!(config.export_file_name, "raza-family.json");
        assert_eq!(config.placeholder_image, PLACEHOLDER_IMAGE);
        assert_eq!(config.generation_options.len(), 4);

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_bad_config_reports_path() {
        let path = temp_file("bad");
        fs::write(&path, "not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(format!("{err}").contains("failed to parse"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_level_parsing() {
        let mut config = AppConfig::default();
        assert_eq!(config.level(), Level::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.level(), Level::DEBUG);
        config.log_level = "chatty".into();
        assert_eq!(config.level(), Level::INFO);
    }
}
