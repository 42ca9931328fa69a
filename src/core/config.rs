//! Application configuration management
//!
//! Handles loading and saving user preferences:
//! - Where the dataset CSV files live
//! - Where the audience images live
//! - Which dataset is selected at startup

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::dataset::DatasetVersion;
use crate::core::images::DEFAULT_IMAGES_DIR;
use crate::error::{Nl2audError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Directory containing the dataset CSV files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Directory containing `audience_{i}.png`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images_dir: Option<PathBuf>,

    /// Dataset selected when the viewer starts
    #[serde(default)]
    pub default_dataset: DatasetVersion,
}

impl Config {
    /// Load configuration from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!("Ignoring configuration: {}", e);
                Config::default()
            }
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn load_from_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!("Ignoring configuration at {}: {}", path.display(), e);
            Config::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("com", "nl2aud", "nl2aud")
            .ok_or_else(|| Nl2audError::Config("Could not determine config directory".into()))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// Data directory, falling back to the working directory
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Images directory, falling back to `images`
    pub fn resolved_images_dir(&self) -> PathBuf {
        self.images_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGES_DIR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_dataset, DatasetVersion::AttributeSwap);
        assert_eq!(config.resolved_data_dir(), PathBuf::from("."));
        assert_eq!(config.resolved_images_dir(), PathBuf::from("images"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: Some(PathBuf::from("/srv/nl2aud")),
            images_dir: None,
            default_dataset: DatasetVersion::NaiveClustering,
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("default_dataset = \"naive_clustering\""));
        assert!(!contents.contains("images_dir"));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_dataset = \"kmeans\"").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Nl2audError::Toml(_))));
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = [").unwrap();
        assert_eq!(Config::load_from_or_default(&path), Config::default());

        fs::write(&path, "default_dataset = \"naive_clustering\"").unwrap();
        assert_eq!(
            Config::load_from_or_default(&path).default_dataset,
            DatasetVersion::NaiveClustering
        );
    }
}
