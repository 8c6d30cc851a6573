//! Configuration loading.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `HH:MM-HH:MM` range or word per line.
    #[default]
    Text,
    /// JSON documents on stdout.
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Schedule document to read when `-i` is not given.
    #[serde(default)]
    pub schedule_path: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Defaults, then `~/.config/slots/config.toml`, then `config_path`, then
    /// `SLOTS_*` environment variables.
    #[allow(clippy::result_large_err)]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(config_dir) = dirs::config_dir() {
            figment = figment.merge(Toml::file(config_dir.join("slots").join("config.toml")));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("SLOTS_"));

        figment.extract()
    }
}
