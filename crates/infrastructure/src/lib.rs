//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the DuckDB and SQLite
//! engine connections, the random interference policy, the stderr sink and
//! the blocking pause. Also owns configuration loading and wiring.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod interference;
pub mod persistence;

pub use adapters::*;
pub use bootstrap::{connect, connect_in_memory, open_duckdb, open_sqlite, wrap};
pub use config::{DatabaseConfig, EngineKind, GooseConfig, InterferenceConfig};
pub use interference::{HonkStats, PauseDistribution, RandomInterference};
pub use persistence::{DuckDbConnection, IN_MEMORY, SqliteConnection};
