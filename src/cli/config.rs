//! Configuration CLI command handlers

use std::path::PathBuf;

use crate::cli::commands::{ConfigCommand, ConfigKey};
use crate::core::config::Config;
use crate::core::dataset::DatasetVersion;
use crate::error::{Nl2audError, Result};

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Set { key, value } => handle_set(key, value),
        ConfigCommand::Get { key } => handle_get(key),
        ConfigCommand::Remove { key } => handle_remove(key),
        ConfigCommand::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
    }
}

/// Handle setting a configuration value
fn handle_set(key: ConfigKey, value: String) -> Result<()> {
    let mut config = Config::load()?;
    apply_set(&mut config, key, &value)?;
    config.save()?;

    println!("{} set to: {}", key_name(key), describe(&config, key));
    Ok(())
}

/// Handle getting a configuration value
fn handle_get(key: ConfigKey) -> Result<()> {
    let config = Config::load()?;
    println!("{}: {}", key_name(key), describe(&config, key));
    Ok(())
}

/// Handle removing a configuration value
fn handle_remove(key: ConfigKey) -> Result<()> {
    let mut config = Config::load()?;
    apply_remove(&mut config, key);
    config.save()?;

    println!("{} reset to default: {}", key_name(key), describe(&config, key));
    Ok(())
}

fn apply_set(config: &mut Config, key: ConfigKey, value: &str) -> Result<()> {
    match key {
        ConfigKey::DataDir => config.data_dir = Some(PathBuf::from(value)),
        ConfigKey::ImagesDir => config.images_dir = Some(PathBuf::from(value)),
        ConfigKey::DefaultDataset => {
            config.default_dataset = DatasetVersion::from_str(value).ok_or_else(|| {
                Nl2audError::InvalidInput(format!(
                    "Invalid dataset '{}'. Available datasets: {}",
                    value,
                    DatasetVersion::all()
                        .iter()
                        .map(|v| v.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })?;
        }
    }
    Ok(())
}

fn apply_remove(config: &mut Config, key: ConfigKey) {
    match key {
        ConfigKey::DataDir => config.data_dir = None,
        ConfigKey::ImagesDir => config.images_dir = None,
        ConfigKey::DefaultDataset => config.default_dataset = DatasetVersion::default(),
    }
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::DataDir => "Data directory",
        ConfigKey::ImagesDir => "Images directory",
        ConfigKey::DefaultDataset => "Default dataset",
    }
}

fn describe(config: &Config, key: ConfigKey) -> String {
    match key {
        ConfigKey::DataDir => config.resolved_data_dir().display().to_string(),
        ConfigKey::ImagesDir => config.resolved_images_dir().display().to_string(),
        ConfigKey::DefaultDataset => config.default_dataset.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove_dataset() {
        let mut config = Config::default();
        apply_set(&mut config, ConfigKey::DefaultDataset, "naive_clustering").unwrap();
        assert_eq!(config.default_dataset, DatasetVersion::NaiveClustering);

        apply_remove(&mut config, ConfigKey::DefaultDataset);
        assert_eq!(config.default_dataset, DatasetVersion::AttributeSwap);
    }

    #[test]
    fn test_set_invalid_dataset() {
        let mut config = Config::default();
        let err = apply_set(&mut config, ConfigKey::DefaultDataset, "kmeans").unwrap_err();
        assert!(err.to_string().contains("attribute_swap, naive_clustering"));
    }

    #[test]
    fn test_set_directories() {
        let mut config = Config::default();
        apply_set(&mut config, ConfigKey::ImagesDir, "/srv/images").unwrap();
        assert_eq!(describe(&config, ConfigKey::ImagesDir), "/srv/images");
        assert_eq!(describe(&config, ConfigKey::DataDir), ".");
    }
}
