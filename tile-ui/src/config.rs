//! TOML configuration for the wizard.
//!
//! Every key is optional:
//!
//! ```toml
//! language = "en"
//! temp_dir = "."
//!
//! [translation]
//! backend = "libretranslate"
//! endpoint = "https://libretranslate.com"
//! api_key = ""
//!
//! [smtp]
//! host = "smtp.gmail.com"
//! port = 465
//! username = "your_email@gmail.com"
//! password = "your_app_password"
//! from = "your_email@gmail.com"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tile_adapters::SmtpConfig;
use tile_core::{Language, TranslatorConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language prompts start in.
    pub language: Language,

    /// Directory uploads are staged in while being measured.
    pub temp_dir: PathBuf,

    pub translation: TranslatorConfig,

    /// Mail relay; estimates cannot be emailed without it.
    pub smtp: Option<SmtpConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: Language::En,
            temp_dir: PathBuf::from("."),
            translation: TranslatorConfig::default(),
            smtp: None,
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown values.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file cannot be read, otherwise
    /// whatever [`AppConfig::from_toml_str`] returns.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
