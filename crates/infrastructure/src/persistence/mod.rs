//! Persistence module
//!
//! Embedded database engines behind `SqlConnectionPort`: DuckDB by default,
//! SQLite as an alternative.

mod duckdb_connection;
mod sqlite_connection;

pub use duckdb_connection::DuckDbConnection;
pub use sqlite_connection::SqliteConnection;

/// Target string for an ephemeral in-memory database
pub const IN_MEMORY: &str = ":memory:";
