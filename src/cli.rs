//! Command line interface.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "catswipe", version, about = "Swipe through cats in your terminal")]
pub struct Cli {
    /// Path to config file (default: ~/.config/catswipe/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of cats per session
    #[arg(long, value_name = "N")]
    pub batch_size: Option<usize>,

    /// Base URL of the cat API
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Prefix for image URLs
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,

    /// Only fetch cats with this tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

impl Cli {
    /// Reads the config file, applies command line overrides on top and
    /// validates the merged result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(batch_size) = self.batch_size {
            config.api.batch_size = batch_size;
        }
        if let Some(api_url) = &self.api_url {
            config.api.base_url = api_url.clone();
        }
        if let Some(image_url) = &self.image_url {
            config.api.image_base_url = image_url.clone();
        }
        if !self.tags.is_empty() {
            config.api.tags = self.tags.clone();
        }
    }
}
