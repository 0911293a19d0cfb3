//! Database engine configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::persistence::IN_MEMORY;

/// Embedded engine the goose sits in front of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// DuckDB (default)
    #[default]
    DuckDb,
    /// SQLite
    Sqlite,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuckDb => write!(f, "duckdb"),
            Self::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "duckdb" | "duck" => Ok(Self::DuckDb),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            _ => Err(format!("Invalid engine: {s}. Use 'duckdb' or 'sqlite'")),
        }
    }
}

/// Database target configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the database file, or `:memory:` for an ephemeral database
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Engine to open the target with
    #[serde(default)]
    pub engine: EngineKind,
}

fn default_db_path() -> String {
    IN_MEMORY.to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            engine: EngineKind::default(),
        }
    }
}
