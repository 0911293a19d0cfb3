//! Bookkeeping for goose interference.
//!
//! Counters only. Nothing here feeds back into the interference decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Result of one interference decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HonkOutcome {
    /// The goose let the call through
    Spared,
    /// The goose attacked
    Attacked,
}

/// Statistics about goose interference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HonkStats {
    /// Total number of interference decisions
    pub total_calls: u64,
    /// Number of attacks
    pub attacks: u64,
    /// Number of calls the goose let through
    pub calls_spared: u64,
    /// Number of error responses handed out
    pub error_responses: u64,
    /// Total dramatic pause served (milliseconds)
    pub total_pause_ms: u64,
}

impl HonkStats {
    /// Observed attack frequency
    #[allow(clippy::cast_precision_loss)]
    pub fn actual_honk_rate(&self) -> f64 {
        if self.total_calls == 0 {
            0.0
        } else {
            self.attacks as f64 / self.total_calls as f64
        }
    }

    /// Record one decision
    pub fn record_decision(&mut self, outcome: HonkOutcome) {
        self.total_calls += 1;
        match outcome {
            HonkOutcome::Attacked => self.attacks += 1,
            HonkOutcome::Spared => self.calls_spared += 1,
        }
    }

    /// Record a pause attached to an attack
    pub fn record_pause(&mut self, pause: Duration) {
        let ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX);
        self.total_pause_ms = self.total_pause_ms.saturating_add(ms);
    }

    /// Record an error response
    pub fn record_error_response(&mut self) {
        self.error_responses += 1;
    }
}
