//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal news reader
#[derive(Parser, Debug, Default)]
#[command(name = "acaraus")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.config/acaraus/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// News language code to start with (e.g. "de")
    #[arg(long)]
    pub language: Option<String>,

    /// News API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// News API key
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

impl Args {
    /// Load the config file and layer the CLI values on top.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(language) = &self.language {
            config.defaults.language = language.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.news.base_url = base_url.clone();
        }
        if let Some(api_key) = &self.api_key {
            config.news.api_key = Some(api_key.clone());
        }
    }
}
