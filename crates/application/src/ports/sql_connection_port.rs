//! SQL connection port
//!
//! The explicit capability surface of an embedded database connection. Engine
//! adapters implement it directly; the goose wrapper implements it by
//! forwarding, so callers can treat both the same way.

use domain::{QueryFrame, SqlParam};

/// Port for an open connection to an embedded SQL engine
///
/// `Error` is the engine's native error type. It crosses this boundary
/// untouched so callers see exactly what the engine reported.
pub trait SqlConnectionPort {
    /// Native engine error
    type Error: std::error::Error + Send + Sync + 'static;

    /// Execute a single statement, returning the number of affected rows
    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize, Self::Error>;

    /// Run a query and materialize the full result set
    fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryFrame, Self::Error>;

    /// Execute one or more statements without parameters
    fn execute_batch(&self, sql: &str) -> Result<(), Self::Error>;

    /// Open an explicit transaction
    fn begin_transaction(&self) -> Result<(), Self::Error> {
        self.execute_batch("BEGIN TRANSACTION")
    }

    /// Commit the open transaction
    fn commit(&self) -> Result<(), Self::Error> {
        self.execute_batch("COMMIT")
    }

    /// Roll back the open transaction
    fn rollback(&self) -> Result<(), Self::Error> {
        self.execute_batch("ROLLBACK")
    }

    /// Whether the connection is outside an explicit transaction
    fn is_autocommit(&self) -> bool;

    /// Engine name and version string
    fn engine_version(&self) -> Result<String, Self::Error>;
}
