//! The goose's repertoire of messages
//!
//! Two ordered lists: attacks printed before a call and responses printed when
//! the engine rejects a query.

use serde::{Deserialize, Serialize};

/// Default attack messages
pub const DEFAULT_ATTACKS: [&str; 7] = [
    "HONK! HONK! *aggressively waddles toward you*",
    "*sneaks up behind you* ... HONK!",
    "*pecks at your keyboard* HONK! HONK!",
    "*flaps wings menacingly* ...honk...",
    "*chases you around your desk* HONK! HONK! HONK!",
    "*stares judgmentally at your SQL* ...honk.",
    "*grabs your error message and runs away with it* HONK!",
];

/// Default error responses
pub const DEFAULT_ERROR_RESPONSES: [&str; 4] = [
    "HONK! Your query displeases the goose!",
    "*angry wing flapping* HONK! HONK! Query bad!",
    "*steals your error message and shreds it* HONK!",
    "The goose has decided your SQL needs work. HONK!",
];

/// Messages the goose chooses from
///
/// Either list may be empty, in which case that kind of message is never printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GooseRepertoire {
    attacks: Vec<String>,
    error_responses: Vec<String>,
}

impl GooseRepertoire {
    /// Create a repertoire from explicit message lists
    pub fn new(attacks: Vec<String>, error_responses: Vec<String>) -> Self {
        Self {
            attacks,
            error_responses,
        }
    }

    /// Replace the attack list
    #[must_use]
    pub fn with_attacks(mut self, attacks: Vec<String>) -> Self {
        self.attacks = attacks;
        self
    }

    /// Replace the error response list
    #[must_use]
    pub fn with_error_responses(mut self, error_responses: Vec<String>) -> Self {
        self.error_responses = error_responses;
        self
    }

    /// Attack messages, in order
    pub fn attacks(&self) -> &[String] {
        &self.attacks
    }

    /// Error responses, in order
    pub fn error_responses(&self) -> &[String] {
        &self.error_responses
    }

    /// Whether `line` is one of the attack messages
    pub fn is_attack(&self, line: &str) -> bool {
        self.attacks.iter().any(|a| a == line)
    }

    /// Whether `line` is one of the error responses
    pub fn is_error_response(&self, line: &str) -> bool {
        self.error_responses.iter().any(|r| r == line)
    }
}

impl Default for GooseRepertoire {
    fn default() -> Self {
        Self {
            attacks: DEFAULT_ATTACKS.iter().map(ToString::to_string).collect(),
            error_responses: DEFAULT_ERROR_RESPONSES
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}
