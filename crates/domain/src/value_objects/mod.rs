//! Value Objects - Immutable, identity-less domain primitives

mod honk_probability;
mod sql_param;

pub use honk_probability::HonkProbability;
pub use sql_param::SqlParam;
