//! Pause port
//!
//! Serves the dramatic pause that follows an attack.

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

/// Port for blocking the calling thread
#[cfg_attr(test, automock)]
pub trait PausePort: Send + Sync {
    /// Block for `duration`
    fn pause(&self, duration: Duration);
}
