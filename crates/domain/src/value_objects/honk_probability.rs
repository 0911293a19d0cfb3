//! Honk probability value object
//!
//! The chance that the goose interferes with a single call.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::HonkProbability;
//!
//! let p = HonkProbability::new(0.3);
//! assert!(p.fires(0.1));
//! assert!(!p.fires(0.3));
//!
//! // Out-of-range values degrade to never/always
//! assert!(!HonkProbability::new(-1.0).fires(0.0));
//! assert!(HonkProbability::new(7.0).fires(0.999));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability of goose interference per delegated call
///
/// Nominally in `[0, 1]` but not validated. Anything below zero
/// (or NaN) never fires and anything at or above one always fires.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HonkProbability(f64);

impl HonkProbability {
    /// Default interference rate
    pub const DEFAULT: Self = Self(0.3);

    /// The goose is asleep
    pub const NEVER: Self = Self(0.0);

    /// The goose is relentless
    pub const ALWAYS: Self = Self(1.0);

    /// Wrap a raw probability
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw probability
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Decide the outcome for a uniform draw in `[0, 1)`
    #[must_use]
    pub fn fires(self, draw: f64) -> bool {
        draw < self.0
    }
}

impl Default for HonkProbability {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for HonkProbability {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for HonkProbability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.0 * 100.0)
    }
}
