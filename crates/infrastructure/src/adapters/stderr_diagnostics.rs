//! Standard error diagnostic sink
//!
//! Goose messages go to stderr so redirected stdout stays clean.

use std::io::{self, Write};

use application::ports::DiagnosticPort;

/// Writes each diagnostic line to the process's standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl StderrDiagnostics {
    /// Create a new stderr sink
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticPort for StderrDiagnostics {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{line}");
    }
}
