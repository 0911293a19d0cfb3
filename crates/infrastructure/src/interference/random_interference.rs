//! Random goose interference.
//!
//! The production interference policy: a uniform draw against the honk
//! probability, a uniformly chosen message and a uniformly drawn pause.

use application::ports::InterferencePort;
use domain::{Attack, GooseRepertoire, HonkProbability};
use parking_lot::Mutex;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::{HonkOutcome, HonkStats, PauseDistribution};

/// Interference policy driven by the thread-local RNG
#[derive(Debug)]
pub struct RandomInterference {
    probability: HonkProbability,
    repertoire: GooseRepertoire,
    pause: PauseDistribution,
    stats: Mutex<HonkStats>,
}

impl Default for RandomInterference {
    fn default() -> Self {
        Self::new(HonkProbability::default())
    }
}

impl RandomInterference {
    /// Create a policy with the default repertoire and a 0.5 to 2 s pause
    pub fn new(probability: HonkProbability) -> Self {
        Self::with_parts(
            probability,
            GooseRepertoire::default(),
            PauseDistribution::default(),
        )
    }

    /// Create a policy from explicit parts
    pub fn with_parts(
        probability: HonkProbability,
        repertoire: GooseRepertoire,
        pause: PauseDistribution,
    ) -> Self {
        Self {
            probability,
            repertoire,
            pause,
            stats: Mutex::new(HonkStats::default()),
        }
    }

    /// A goose that never attacks
    pub fn never() -> Self {
        Self::with_parts(
            HonkProbability::NEVER,
            GooseRepertoire::default(),
            PauseDistribution::none(),
        )
    }

    /// A goose that attacks every call, with the given pause
    pub fn always(pause: PauseDistribution) -> Self {
        Self::with_parts(HonkProbability::ALWAYS, GooseRepertoire::default(), pause)
    }

    /// Replace the repertoire
    #[must_use]
    pub fn with_repertoire(mut self, repertoire: GooseRepertoire) -> Self {
        self.repertoire = repertoire;
        self
    }

    /// Replace the pause distribution
    #[must_use]
    pub const fn with_pause(mut self, pause: PauseDistribution) -> Self {
        self.pause = pause;
        self
    }

    /// Configured probability
    pub const fn probability(&self) -> HonkProbability {
        self.probability
    }

    /// Configured repertoire
    pub const fn repertoire(&self) -> &GooseRepertoire {
        &self.repertoire
    }

    /// Get a copy of current statistics
    pub fn stats_snapshot(&self) -> HonkStats {
        self.stats.lock().clone()
    }

    /// Reset statistics
    pub fn reset(&self) {
        *self.stats.lock() = HonkStats::default();
    }
}

impl InterferencePort for RandomInterference {
    fn next_attack(&self) -> Option<Attack> {
        let mut rng = rand::rng();
        let draw: f64 = rng.random();

        if !self.probability.fires(draw) {
            self.stats.lock().record_decision(HonkOutcome::Spared);
            return None;
        }

        // An empty repertoire has nothing to say, so nothing happens.
        let Some(message) = self.repertoire.attacks().choose(&mut rng).cloned() else {
            self.stats.lock().record_decision(HonkOutcome::Spared);
            return None;
        };
        let pause = self.pause.sample();

        let mut stats = self.stats.lock();
        stats.record_decision(HonkOutcome::Attacked);
        stats.record_pause(pause);

        Some(Attack::new(message, pause))
    }

    fn error_response(&self) -> Option<String> {
        let response = self
            .repertoire
            .error_responses()
            .choose(&mut rand::rng())?
            .clone();
        self.stats.lock().record_error_response();
        Some(response)
    }
}
