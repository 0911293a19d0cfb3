//! Interference configuration: how often and how dramatically the goose strikes.

use std::time::Duration;

use domain::{GooseRepertoire, HonkProbability};
use serde::{Deserialize, Serialize};

use crate::interference::{PauseDistribution, RandomInterference};

/// Goose interference configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterferenceConfig {
    /// Chance of an attack per delegated call (default: 0.3)
    #[serde(default)]
    pub honk_probability: HonkProbability,

    /// Shortest dramatic pause in milliseconds (default: 500)
    #[serde(default = "default_pause_min_ms")]
    pub pause_min_ms: u64,

    /// Longest dramatic pause in milliseconds (default: 2000)
    #[serde(default = "default_pause_max_ms")]
    pub pause_max_ms: u64,

    /// Replacement attack messages
    #[serde(default)]
    pub attacks: Option<Vec<String>>,

    /// Replacement error responses
    #[serde(default)]
    pub error_responses: Option<Vec<String>>,
}

const fn default_pause_min_ms() -> u64 {
    500
}

const fn default_pause_max_ms() -> u64 {
    2000
}

impl Default for InterferenceConfig {
    fn default() -> Self {
        Self {
            honk_probability: HonkProbability::default(),
            pause_min_ms: default_pause_min_ms(),
            pause_max_ms: default_pause_max_ms(),
            attacks: None,
            error_responses: None,
        }
    }
}

impl InterferenceConfig {
    /// Pause range as a distribution
    pub fn pause(&self) -> PauseDistribution {
        PauseDistribution::uniform(
            Duration::from_millis(self.pause_min_ms),
            Duration::from_millis(self.pause_max_ms),
        )
    }

    /// Default repertoire with any configured overrides applied
    pub fn repertoire(&self) -> GooseRepertoire {
        let mut repertoire = GooseRepertoire::default();
        if let Some(attacks) = &self.attacks {
            repertoire = repertoire.with_attacks(attacks.clone());
        }
        if let Some(responses) = &self.error_responses {
            repertoire = repertoire.with_error_responses(responses.clone());
        }
        repertoire
    }

    /// Build the random interference policy described by this config
    pub fn build_policy(&self) -> RandomInterference {
        RandomInterference::with_parts(self.honk_probability, self.repertoire(), self.pause())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interference_config_default() {
        let config = InterferenceConfig::default();
        assert!((config.honk_probability.value() - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.pause(), PauseDistribution::default());
        assert_eq!(config.repertoire(), GooseRepertoire::default());
    }

    #[test]
    fn overrides_replace_repertoire_lists() {
        let config = InterferenceConfig {
            attacks: Some(vec!["honk".to_string()]),
            error_responses: Some(Vec::new()),
            ..Default::default()
        };
        let repertoire = config.repertoire();
        assert_eq!(repertoire.attacks(), ["honk"]);
        assert!(repertoire.error_responses().is_empty());
    }

    #[test]
    fn build_policy_uses_configured_probability() {
        let config = InterferenceConfig {
            honk_probability: HonkProbability::new(0.9),
            ..Default::default()
        };
        let policy = config.build_policy();
        assert!((policy.probability().value() - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: InterferenceConfig = toml::from_str("honk_probability = 0.5").unwrap();
        assert!((config.honk_probability.value() - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.pause_min_ms, 500);
    }
}
