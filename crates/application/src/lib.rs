//! Application layer - The goose wrapper and its ports
//!
//! Defines the ports the wrapper talks through (engine connection,
//! interference policy, diagnostic sink, pause) and the `GooseDb` service
//! that ties them together. Adapters in the infrastructure layer implement
//! the ports.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
