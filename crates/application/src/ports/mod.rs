//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod diagnostic_port;
mod interference_port;
mod pause_port;
mod sql_connection_port;

pub use diagnostic_port::DiagnosticPort;
#[cfg(test)]
pub use diagnostic_port::MockDiagnosticPort;
pub use interference_port::InterferencePort;
#[cfg(test)]
pub use interference_port::MockInterferencePort;
#[cfg(test)]
pub use pause_port::MockPausePort;
pub use pause_port::PausePort;
pub use sql_connection_port::SqlConnectionPort;
