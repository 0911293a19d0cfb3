//! Dramatic pause distribution.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Uniform range the dramatic pause is drawn from (both ends inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseDistribution {
    /// Shortest pause
    pub min: Duration,
    /// Longest pause
    pub max: Duration,
}

impl PauseDistribution {
    /// Create a constant pause (no variation)
    pub const fn constant(duration: Duration) -> Self {
        Self {
            min: duration,
            max: duration,
        }
    }

    /// Create a uniformly distributed pause range
    ///
    /// Bounds given in the wrong order are swapped.
    pub fn uniform(min: Duration, max: Duration) -> Self {
        Self {
            min: min.min(max),
            max: max.max(min),
        }
    }

    /// No pause at all
    pub const fn none() -> Self {
        Self::constant(Duration::ZERO)
    }

    /// Sample a pause from this distribution
    #[allow(clippy::cast_possible_truncation)]
    pub fn sample(&self) -> Duration {
        use rand::Rng;

        let range = self.max.saturating_sub(self.min).as_nanos();
        if range == 0 {
            return self.min;
        }
        let random_nanos = rand::rng().random_range(0..=range);
        self.min + Duration::from_nanos(random_nanos as u64)
    }
}

impl Default for PauseDistribution {
    /// Half a second to two seconds
    fn default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(2000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_distribution_default() {
        let dist = PauseDistribution::default();
        assert_eq!(dist.min, Duration::from_millis(500));
        assert_eq!(dist.max, Duration::from_secs(2));
    }

    #[test]
    fn pause_distribution_constant() {
        let dist = PauseDistribution::constant(Duration::from_millis(100));
        assert_eq!(dist.sample(), Duration::from_millis(100));
    }

    #[test]
    fn pause_distribution_none() {
        assert_eq!(PauseDistribution::none().sample(), Duration::ZERO);
    }

    #[test]
    fn pause_distribution_default_stays_in_range() {
        let dist = PauseDistribution::default();
        for _ in 0..1000 {
            let sample = dist.sample();
            assert!(sample >= Duration::from_millis(500));
            assert!(sample <= Duration::from_millis(2000));
        }
    }

    #[test]
    fn pause_distribution_uniform_swaps_reversed_bounds() {
        let dist = PauseDistribution::uniform(Duration::from_secs(2), Duration::from_secs(1));
        assert_eq!(dist.min, Duration::from_secs(1));
        assert_eq!(dist.max, Duration::from_secs(2));
    }

    #[test]
    fn pause_distribution_serialization() {
        let dist = PauseDistribution::constant(Duration::from_millis(100));
        let json = serde_json::to_string(&dist).unwrap();

        let parsed: PauseDistribution = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, dist);
    }
}
