//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod stderr_diagnostics;
mod thread_pause;

pub use stderr_diagnostics::StderrDiagnostics;
pub use thread_pause::{NoPause, ThreadSleepPause};
