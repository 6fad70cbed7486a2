//! Layered settings.
//!
//! Sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `vitrine.toml` in the working directory, or the file given with `--config`
//! 3. `VITRINE_*` environment variables (`VITRINE_DATA_PATH`, `VITRINE_OUTPUT`, `VITRINE_LOG`)
//! 4. Command-line flags

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vitrine_dispatch::OutputMode;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

const ENV_PREFIX: &str = "VITRINE_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("invalid configuration: {0}")]
    Invalid(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Invalid(Box::new(err))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Catalog file to browse.
    pub data_path: PathBuf,
    pub output: OutputMode,
    /// Log filter used when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_path: PathBuf::from("data.json"),
            output: OutputMode::Auto,
            log: "warn".to_string(),
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Overrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

/// Loads settings from every layer.
///
/// An explicit `config` path must exist. The default file is optional.
pub fn load(config: Option<&Path>, overrides: &Overrides) -> Result<Settings, ConfigError> {
    let figment = Figment::from(Serialized::defaults(Settings::default()));

    let figment = match config {
        Some(path) if !path.is_file() => return Err(ConfigError::Missing(path.to_path_buf())),
        Some(path) => figment.merge(Toml::file(path)),
        None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
    };

    let settings = figment
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides))
        .extract()?;
    Ok(settings)
}
