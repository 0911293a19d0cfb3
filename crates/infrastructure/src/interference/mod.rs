//! Goose interference policies.
//!
//! Decides, per delegated call, whether the goose attacks, what it says and
//! how long the dramatic pause lasts.
//!
//! # Overview
//!
//! - `RandomInterference`: the production policy, implements `InterferencePort`
//! - `PauseDistribution`: uniform range the dramatic pause is drawn from
//! - `HonkStats`: counters for observed attacks, pauses and error responses
//!
//! # Example
//!
//! ```
//! use application::ports::InterferencePort;
//! use domain::HonkProbability;
//! use infrastructure::interference::{PauseDistribution, RandomInterference};
//!
//! let goose = RandomInterference::new(HonkProbability::ALWAYS)
//!     .with_pause(PauseDistribution::none());
//!
//! let attack = goose.next_attack().expect("relentless goose");
//! assert!(goose.repertoire().is_attack(&attack.message));
//! ```

mod honk_stats;
mod pause_distribution;
mod random_interference;

pub use honk_stats::{HonkOutcome, HonkStats};
pub use pause_distribution::PauseDistribution;
pub use random_interference::RandomInterference;
