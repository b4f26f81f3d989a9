//! # Application Configuration
//!
//! Configuration is layered, lowest priority first:
//! 1. the defaults embedded from `resources/default_config.toml`,
//! 2. environment variables prefixed with `STBUILD_`,
//! 3. an optional file passed with `--config`,
//! 4. overrides taken from the command line (`--debug`, `--log-level`).
//!
//! The layers are collected in a process-wide builder and only resolved when
//! [`AppConfig::fetch`] or [`AppConfig::get`] is called.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::RwLock;

use super::error::{Error, Result};
use crate::utils::types::LogLevel;

lazy_static! {
    static ref BUILDER: RwLock<ConfigBuilder<DefaultState>> =
        RwLock::new(ConfigBuilder::<DefaultState>::default());
}

/// Resolved application configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub debug: bool,
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Resets the builder to the embedded defaults plus the environment layer.
    pub fn init(default_config: Option<&str>) -> Result<()> {
        let mut builder = Config::builder();

        if let Some(contents) = default_config {
            builder = builder.add_source(File::from_str(contents, FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("STBUILD"));

        let mut w = BUILDER.write()?;
        *w = builder;

        Ok(())
    }

    /// Adds a user supplied configuration file on top of the current layers.
    pub fn merge_config(config_file: Option<&Path>) -> Result<()> {
        if let Some(path) = config_file {
            if !path.is_file() {
                return Err(Error::new(&format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }

            let mut w = BUILDER.write()?;
            let builder = std::mem::take(&mut *w);
            *w = builder.add_source(File::from(path));
        }

        Ok(())
    }

    /// Applies the command line overrides that map onto configuration keys.
    pub fn merge_args(matches: &clap::ArgMatches) -> Result<()> {
        if let Some(debug) = matches.get_one::<bool>("debug") {
            AppConfig::set("debug", &debug.to_string())?;
        }

        if let Some(level) = matches.get_one::<LogLevel>("log_level") {
            AppConfig::set("log_level", &level.to_string())?;
        }

        Ok(())
    }

    pub fn set(key: &str, value: &str) -> Result<()> {
        let mut w = BUILDER.write()?;
        let builder = std::mem::take(&mut *w);
        *w = builder.set_override(key, value)?;

        Ok(())
    }

    pub fn get<'de, T>(key: &str) -> Result<T>
    where
        T: Deserialize<'de>,
    {
        let config = BUILDER.read()?.clone().build()?;

        Ok(config.get::<T>(key)?)
    }

    pub fn fetch() -> Result<AppConfig> {
        let config = BUILDER.read()?.clone().build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The builder is process-wide, so everything touching it lives in one test.
    #[test]
    fn test_layers_resolve_in_order() -> Result<()> {
        AppConfig::init(Some(include_str!("../resources/default_config.toml")))?;

        let config = AppConfig::fetch()?;
        assert!(!config.debug);
        assert_eq!(config.log_level, LogLevel::Info);

        let temp_dir = tempfile::TempDir::new()?;
        let file = temp_dir.path().join("override.toml");
        std::fs::write(&file, "log_level = \"warn\"\n")?;
        AppConfig::merge_config(Some(&file))?;
        assert_eq!(AppConfig::fetch()?.log_level, LogLevel::Warn);

        AppConfig::set("debug", "true")?;
        assert!(AppConfig::get::<bool>("debug")?);

        let missing = temp_dir.path().join("missing.toml");
        assert!(AppConfig::merge_config(Some(&missing)).is_err());

        Ok(())
    }
}
