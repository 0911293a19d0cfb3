//! Wiring: open an engine and put a goose in front of it
//!
//! The production wiring writes goose messages to stderr and serves pauses
//! with `thread::sleep`. Opening failures are the engine's own errors,
//! returned untouched; no goose is involved yet at that point.

use std::sync::Arc;

use application::GooseDb;
use application::ports::SqlConnectionPort;
use domain::HonkProbability;
use tracing::info;

use crate::adapters::{StderrDiagnostics, ThreadSleepPause};
use crate::config::{GooseConfig, InterferenceConfig};
use crate::interference::RandomInterference;
use crate::persistence::{DuckDbConnection, IN_MEMORY, SqliteConnection};

/// Wrap an already open connection using the production adapters
pub fn wrap<C: SqlConnectionPort>(connection: C, interference: &InterferenceConfig) -> GooseDb<C> {
    GooseDb::new(
        connection,
        Arc::new(interference.build_policy()),
        Arc::new(StderrDiagnostics::new()),
        Arc::new(ThreadSleepPause),
    )
}

/// Open a DuckDB target with the default repertoire and pause range
pub fn connect(
    path: &str,
    honk_probability: impl Into<HonkProbability>,
) -> Result<GooseDb<DuckDbConnection>, duckdb::Error> {
    let connection = DuckDbConnection::open(path)?;
    Ok(GooseDb::new(
        connection,
        Arc::new(RandomInterference::new(honk_probability.into())),
        Arc::new(StderrDiagnostics::new()),
        Arc::new(ThreadSleepPause),
    ))
}

/// Open an in-memory DuckDB database with a 30% goose
pub fn connect_in_memory() -> Result<GooseDb<DuckDbConnection>, duckdb::Error> {
    connect(IN_MEMORY, HonkProbability::default())
}

/// Open the configured target with DuckDB
pub fn open_duckdb(config: &GooseConfig) -> Result<GooseDb<DuckDbConnection>, duckdb::Error> {
    info!(
        engine = "duckdb",
        path = %config.database.path,
        honk_probability = config.interference.honk_probability.value(),
        "Releasing the goose"
    );
    let connection = DuckDbConnection::open(&config.database.path)?;
    Ok(wrap(connection, &config.interference))
}

/// Open the configured target with SQLite
pub fn open_sqlite(config: &GooseConfig) -> Result<GooseDb<SqliteConnection>, rusqlite::Error> {
    info!(
        engine = "sqlite",
        path = %config.database.path,
        honk_probability = config.interference.honk_probability.value(),
        "Releasing the goose"
    );
    let connection = SqliteConnection::open(&config.database.path)?;
    Ok(wrap(connection, &config.interference))
}
