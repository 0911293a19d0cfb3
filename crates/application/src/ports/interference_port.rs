//! Interference port
//!
//! Decides when and how the goose gets in the way.

use domain::Attack;
#[cfg(test)]
use mockall::automock;

/// Port for the interference policy
///
/// Every call is an independent decision; implementations must not let
/// earlier outcomes influence later ones.
#[cfg_attr(test, automock)]
pub trait InterferencePort: Send + Sync {
    /// Decide whether to attack before a delegated call
    ///
    /// Returns the attack to perform, or `None` to let the call through quietly.
    fn next_attack(&self) -> Option<Attack>;

    /// Pick the message printed when the engine rejects a query
    ///
    /// `None` when there is nothing to say.
    fn error_response(&self) -> Option<String>;
}
