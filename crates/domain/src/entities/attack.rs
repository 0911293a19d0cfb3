//! A single decided goose attack

use std::time::Duration;

/// One interference: a message to print and a pause to serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Message written to the diagnostic stream
    pub message: String,
    /// Dramatic pause that follows the message
    pub pause: Duration,
}

impl Attack {
    /// Create a new attack
    pub fn new(message: impl Into<String>, pause: Duration) -> Self {
        Self {
            message: message.into(),
            pause,
        }
    }

    /// Attack with no pause
    pub fn instant(message: impl Into<String>) -> Self {
        Self::new(message, Duration::ZERO)
    }
}
