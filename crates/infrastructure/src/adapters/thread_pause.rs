//! Blocking pause adapters

use std::thread;
use std::time::Duration;

use application::ports::PausePort;

/// Serves the dramatic pause by sleeping on the calling thread
///
/// There is no cancellation hook; callers wanting a latency bound must impose it externally.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleepPause;

impl PausePort for ThreadSleepPause {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Skips every pause
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl PausePort for NoPause {
    fn pause(&self, _duration: Duration) {}
}
