//! CLI configuration: built-in defaults, an optional TOML file, then
//! `STAKESIM_*` environment variables.
//!
//! Nested keys use a double underscore in the environment, e.g.
//! `STAKESIM_INPUT__POOL_APR_PERCENT=120` or `STAKESIM_LOCALE=en-us`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use stakesim_core::SimulationInput;
use stakesim_report::Locale;

pub const ENV_PREFIX: &str = "STAKESIM";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Starting input snapshot before any command-line overrides.
    pub input: SimulationInput,
    /// Log level filter string (e.g. "info", "stakesim_core=trace").
    pub log_level: String,
    /// Log output format ("text" or "json").
    pub log_format: String,
    pub locale: Locale,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: SimulationInput::default(),
            log_level: "warn".to_string(),
            log_format: "text".to_string(),
            locale: Locale::default(),
        }
    }
}

impl CliConfig {
    /// `<config dir>/stakesim/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stakesim").join("config.toml"))
    }

    /// Load from the process environment. An explicit `path` must exist; the
    /// default path is used only when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load) but with an explicit environment map.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self> {
        let defaults = ::config::Config::try_from(&Self::default())
            .context("Failed to serialize default configuration")?;

        let mut builder = ::config::Config::builder().add_source(defaults);

        match path {
            Some(p) => {
                builder = builder.add_source(::config::File::from(p).required(true));
            }
            None => {
                if let Some(p) = Self::default_path() {
                    builder = builder.add_source(::config::File::from(p).required(false));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}
