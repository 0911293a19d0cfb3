//! The goose-infested database wrapper
//!
//! `GooseDb` owns a connection and forwards every call to it unchanged. Before
//! each call the interference policy may print an attack and pause the thread.
//! When `execute` or `query` fails, an error response is printed and the
//! engine's error is returned as-is.

use std::fmt;
use std::sync::Arc;

use domain::{QueryFrame, SqlParam};
use tracing::debug;

use crate::ports::{DiagnosticPort, InterferencePort, PausePort, SqlConnectionPort};

/// Interference wrapper around an engine connection
pub struct GooseDb<C> {
    connection: C,
    interference: Arc<dyn InterferencePort>,
    diagnostics: Arc<dyn DiagnosticPort>,
    pause: Arc<dyn PausePort>,
}

impl<C> fmt::Debug for GooseDb<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GooseDb").finish_non_exhaustive()
    }
}

impl<C: SqlConnectionPort> GooseDb<C> {
    /// Wrap an open connection
    pub fn new(
        connection: C,
        interference: Arc<dyn InterferencePort>,
        diagnostics: Arc<dyn DiagnosticPort>,
        pause: Arc<dyn PausePort>,
    ) -> Self {
        Self {
            connection,
            interference,
            diagnostics,
            pause,
        }
    }

    /// Execute a statement, with potential goose interference
    pub fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize, C::Error> {
        self.maybe_attack();
        let result = self.connection.execute(sql, params);
        self.honk_on_error(result)
    }

    /// Run a query and return the whole result as a frame, with potential goose interference
    pub fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryFrame, C::Error> {
        self.maybe_attack();
        let result = self.connection.query(sql, params);
        self.honk_on_error(result)
    }

    /// Reach the raw connection for anything the wrapper does not cover
    ///
    /// The goose gets one chance to interfere first. Whatever happens after
    /// that is between the caller and the engine.
    pub fn delegate(&self) -> &C {
        self.maybe_attack();
        &self.connection
    }

    /// Unwrap the connection, bypassing the goose entirely
    pub fn into_inner(self) -> C {
        self.connection
    }

    fn maybe_attack(&self) {
        if let Some(attack) = self.interference.next_attack() {
            debug!(
                pause_ms = u64::try_from(attack.pause.as_millis()).unwrap_or(u64::MAX),
                "Goose attack"
            );
            self.diagnostics.write_line(&attack.message);
            self.pause.pause(attack.pause);
        }
    }

    fn honk_on_error<T>(&self, result: Result<T, C::Error>) -> Result<T, C::Error> {
        result.inspect_err(|e| {
            debug!(error = %e, "Engine rejected the query");
            if let Some(response) = self.interference.error_response() {
                self.diagnostics.write_line(&response);
            }
        })
    }
}

impl<C: SqlConnectionPort> SqlConnectionPort for GooseDb<C> {
    type Error = C::Error;

    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<usize, Self::Error> {
        Self::execute(self, sql, params)
    }

    fn query(&self, sql: &str, params: &[SqlParam]) -> Result<QueryFrame, Self::Error> {
        Self::query(self, sql, params)
    }

    fn execute_batch(&self, sql: &str) -> Result<(), Self::Error> {
        self.delegate().execute_batch(sql)
    }

    fn begin_transaction(&self) -> Result<(), Self::Error> {
        self.delegate().begin_transaction()
    }

    fn commit(&self) -> Result<(), Self::Error> {
        self.delegate().commit()
    }

    fn rollback(&self) -> Result<(), Self::Error> {
        self.delegate().rollback()
    }

    fn is_autocommit(&self) -> bool {
        self.delegate().is_autocommit()
    }

    fn engine_version(&self) -> Result<String, Self::Error> {
        self.delegate().engine_version()
    }
}
