//! Application configuration
//!
//! Split into focused sub-modules:
//! - `database`: engine and target
//! - `interference`: honk probability, pause range, message overrides
//!
//! Sources are layered: built-in defaults, then `goosedb.toml` (or an explicit
//! file), then `GOOSEDB_*` environment variables with `__` between nesting
//! levels, e.g. `GOOSEDB_INTERFERENCE__HONK_PROBABILITY=0.9`.

mod database;
mod interference;

use std::path::Path;

use domain::HonkProbability;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use database::{DatabaseConfig, EngineKind};
pub use interference::InterferenceConfig;

use crate::persistence::IN_MEMORY;

/// Default configuration file name (extension resolved by `config`)
pub const CONFIG_FILE_NAME: &str = "goosedb";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "GOOSEDB";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GooseConfig {
    /// Database target
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Goose behaviour
    #[serde(default)]
    pub interference: InterferenceConfig,
}

impl GooseConfig {
    /// Load configuration from `goosedb.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file when given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_honk_default(path, HonkProbability::default())
    }

    /// Load configuration with a different built-in honk probability
    ///
    /// `honk_default` is the lowest layer: a file or environment value,
    /// even one equal to the usual default, still wins over it.
    pub fn load_with_honk_default(
        path: Option<&Path>,
        honk_default: HonkProbability,
    ) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("database.path", IN_MEMORY)?
            .set_default("database.engine", "duckdb")?
            .set_default("interference.honk_probability", honk_default.value())?;

        let builder = match path {
            Some(path) => {
                debug!(path = %path.display(), "Loading configuration file");
                builder.add_source(config::File::from(path).required(true))
            },
            None => builder.add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        // Override with environment variables (e.g., GOOSEDB_DATABASE__PATH)
        let config = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
