//! Domain layer for GooseDB
//!
//! Contains the value objects and entities that travel between the wrapper and
//! the database engine adapters. This layer knows nothing about any engine.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
