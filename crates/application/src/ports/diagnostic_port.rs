//! Diagnostic output port
//!
//! Where goose messages go. Never the primary output stream.

#[cfg(test)]
use mockall::automock;

/// Port for the diagnostic side channel
#[cfg_attr(test, automock)]
pub trait DiagnosticPort: Send + Sync {
    /// Write one line
    ///
    /// Write failures are ignored.
    fn write_line(&self, line: &str);
}
